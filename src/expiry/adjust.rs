use super::conditions::StorageCondition;

const COLD_BELOW_C: f64 = 20.0;
const HOT_ABOVE_C: f64 = 30.0;

/// Applies storage, then temperature, to a baseline shelf-life.
///
/// Never returns less than one hour. Hotbox truncates `baseline * 0.7` using
/// integer arithmetic so the result does not depend on float rounding.
pub fn adjust_expiry(
    baseline_hours: u32,
    storage: StorageCondition,
    celsius: Option<f64>,
) -> u32 {
    let mut adjusted = match storage {
        StorageCondition::Fridge => baseline_hours.saturating_mul(2),
        StorageCondition::Hotbox => (baseline_hours.saturating_mul(7) / 10).max(1),
        StorageCondition::Room => baseline_hours,
    };

    if let Some(t) = celsius {
        if t < COLD_BELOW_C {
            adjusted = adjusted.saturating_add(1);
        } else if t > HOT_ABOVE_C {
            adjusted = adjusted.saturating_sub(1).max(1);
        }
    }

    adjusted.max(1)
}
