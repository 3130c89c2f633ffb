use serde::Serialize;

/// Computed stats for one workout, produced once and handed to the formatter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub workout: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Summary {
    /// Fixed-pattern report line. Every numeric field carries exactly three
    /// digits after the decimal point, whatever its magnitude.
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}
