use crate::report::Summary;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Per-action distance for land sports, in meters
const STEP_LEN_M: f64 = 0.65;

/// Common sensor readings shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effort {
    /// movement-unit count reported by the sensor (steps, strokes)
    pub actions: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

/// Stat formulas shared across sports. `duration_h` must be positive;
/// packet dispatch rejects a zero duration before a variant is ever
/// constructed, direct construction is on the caller.
pub trait WorkoutStats {
    fn effort(&self) -> Effort;

    /// Distance covered by one action, in meters
    fn action_length_m(&self) -> f64 {
        STEP_LEN_M
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.effort().actions) * self.action_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.effort().duration_h
    }

    fn calories_kcal(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub effort: Effort,
}

impl Running {
    const SPEED_FACTOR: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;
}

impl WorkoutStats for Running {
    fn effort(&self) -> Effort {
        self.effort
    }

    fn calories_kcal(&self) -> f64 {
        (Self::SPEED_FACTOR * self.mean_speed_kmh() - Self::SPEED_SHIFT) * self.effort.weight_kg
            / M_IN_KM
            * self.effort.duration_h
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub effort: Effort,
    pub height_cm: f64,
}

impl SportsWalking {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;
}

impl WorkoutStats for SportsWalking {
    fn effort(&self) -> Effort {
        self.effort
    }

    fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        // floor, not true division: the truncated quotient feeds straight
        // into the kcal figure
        let speed_term = (speed * speed / self.height_cm).floor();
        (Self::WEIGHT_FACTOR * self.effort.weight_kg
            + speed_term * Self::SPEED_HEIGHT_FACTOR * self.effort.weight_kg)
            * self.effort.duration_h
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub effort: Effort,
    pub pool_length_m: u32,
    pub pool_laps: u32,
}

impl Swimming {
    /// Per-stroke distance, in meters
    const STROKE_LEN_M: f64 = 1.38;
    const SPEED_OFFSET: f64 = 1.1;
}

impl WorkoutStats for Swimming {
    fn effort(&self) -> Effort {
        self.effort
    }

    fn action_length_m(&self) -> f64 {
        Self::STROKE_LEN_M
    }

    /// Pool-based speed; the stroke count plays no part here
    fn mean_speed_kmh(&self) -> f64 {
        f64::from(self.pool_length_m) * f64::from(self.pool_laps) / M_IN_KM
            / self.effort.duration_h
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_OFFSET) * 2.0 * self.effort.weight_kg
    }
}

/// Closed set of workout kinds recognized by the tracker. The display name
/// of each variant is the name that appears in the report line.
#[derive(Debug, Clone, Copy, PartialEq, strum_macros::Display)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn calories_kcal(&self) -> f64 {
        match self {
            Workout::Running(w) => w.calories_kcal(),
            Workout::SportsWalking(w) => w.calories_kcal(),
            Workout::Swimming(w) => w.calories_kcal(),
        }
    }

    fn effort(&self) -> Effort {
        match self {
            Workout::Running(w) => w.effort,
            Workout::SportsWalking(w) => w.effort,
            Workout::Swimming(w) => w.effort,
        }
    }

    /// Collect the computed stats into a report-ready value
    pub fn summary(&self) -> Summary {
        Summary {
            workout: self.to_string(),
            duration_h: self.effort().duration_h,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}
