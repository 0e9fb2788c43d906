//! Ambient sway хвоста: функция только от абсолютного времени.

/// Частота покачивания (радиан на миллисекунду)
pub const TAIL_SWAY_RATE_PER_MS: f32 = 0.003;

/// Амплитуда покачивания (радианы)
pub const TAIL_SWAY_AMPLITUDE: f32 = 0.3;

/// Угол хвоста в момент `elapsed_secs` с начала симуляции
///
/// Время передаётся явно (Time<Fixed>::elapsed), глобальные часы не читаем:
/// одинаковое время → одинаковый угол, независимо от wander/reaction state.
pub fn tail_sway(elapsed_secs: f32) -> f32 {
    let elapsed_ms = elapsed_secs * 1000.0;
    (elapsed_ms * TAIL_SWAY_RATE_PER_MS).sin() * TAIL_SWAY_AMPLITUDE
}
