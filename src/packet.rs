use itertools::Itertools;
use tracing::debug;

use crate::errors::Error;
use crate::workout::{Effort, Running, SportsWalking, Swimming, Workout};

pub const SWIMMING_TAG: &str = "SWM";
pub const RUNNING_TAG: &str = "RUN";
pub const WALKING_TAG: &str = "WLK";

/// One raw reading from the sensor unit: a workout tag plus its numeric
/// payload
#[derive(Debug, Clone, PartialEq)]
pub struct Packet {
    pub tag: String,
    pub values: Vec<f64>,
}

impl Packet {
    /// Parse a whitespace-separated packet line like `SWM 720 1 80 25 40`
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut fields = line.split_whitespace();
        let tag = fields.next().ok_or_else(|| Error::MalformedPacket {
            line: line.to_string(),
            reason: "empty packet".to_string(),
        })?;
        let values = fields
            .map(|field| {
                field.parse::<f64>().map_err(|_| Error::MalformedPacket {
                    line: line.to_string(),
                    reason: format!("{field:?} is not a number"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            tag: tag.to_string(),
            values,
        })
    }

    pub fn into_workout(self) -> Result<Workout, Error> {
        read_packet(&self.tag, &self.values)
    }
}

/// Dispatch a `(tag, values)` pair to the matching workout constructor.
/// The value list must match the constructor arity exactly.
pub fn read_packet(tag: &str, values: &[f64]) -> Result<Workout, Error> {
    debug!(tag, count = values.len(), "dispatching sensor packet");

    match tag {
        SWIMMING_TAG => {
            let (actions, duration_h, weight_kg, pool_length_m, pool_laps) =
                values.iter().copied().collect_tuple().ok_or_else(|| {
                    arity_mismatch(SWIMMING_TAG, 5, values.len())
                })?;
            Ok(Workout::Swimming(Swimming {
                effort: effort(actions, duration_h, weight_kg)?,
                pool_length_m: pool_length_m as u32,
                pool_laps: pool_laps as u32,
            }))
        }
        RUNNING_TAG => {
            let (actions, duration_h, weight_kg) = values
                .iter()
                .copied()
                .collect_tuple()
                .ok_or_else(|| arity_mismatch(RUNNING_TAG, 3, values.len()))?;
            Ok(Workout::Running(Running {
                effort: effort(actions, duration_h, weight_kg)?,
            }))
        }
        WALKING_TAG => {
            let (actions, duration_h, weight_kg, height_cm) = values
                .iter()
                .copied()
                .collect_tuple()
                .ok_or_else(|| arity_mismatch(WALKING_TAG, 4, values.len()))?;
            if height_cm == 0.0 {
                return Err(Error::DivisionByZero { quantity: "height" });
            }
            Ok(Workout::SportsWalking(SportsWalking {
                effort: effort(actions, duration_h, weight_kg)?,
                height_cm,
            }))
        }
        other => Err(Error::InvalidWorkoutType(other.to_string())),
    }
}

fn arity_mismatch(tag: &'static str, expected: usize, got: usize) -> Error {
    Error::ArgumentMismatch { tag, expected, got }
}

/// Common-field constructor; a zero duration would poison every speed and
/// calorie formula downstream, so it is rejected here.
fn effort(actions: f64, duration_h: f64, weight_kg: f64) -> Result<Effort, Error> {
    if duration_h == 0.0 {
        return Err(Error::DivisionByZero {
            quantity: "duration",
        });
    }
    Ok(Effort {
        actions: actions as u32,
        duration_h,
        weight_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::WorkoutStats;
    use assert_matches::assert_matches;

    #[test]
    fn parse_splits_tag_and_values() {
        let packet = Packet::parse("SWM 720 1 80 25 40").unwrap();

        assert_eq!(packet.tag, "SWM");
        assert_eq!(packet.values, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
    }

    #[test]
    fn parse_accepts_fractional_values() {
        let packet = Packet::parse("RUN 15000 0.5 75.5").unwrap();

        assert_eq!(packet.values, vec![15000.0, 0.5, 75.5]);
    }

    #[test]
    fn parse_rejects_blank_lines() {
        assert_matches!(
            Packet::parse("   "),
            Err(Error::MalformedPacket { reason, .. }) if reason == "empty packet"
        );
    }

    #[test]
    fn parse_rejects_non_numeric_values() {
        assert_matches!(
            Packet::parse("RUN 15000 one 75"),
            Err(Error::MalformedPacket { .. })
        );
    }

    #[test]
    fn dispatches_each_known_tag() {
        let swim = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let run = read_packet("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let walk = read_packet("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert_matches!(swim, Workout::Swimming(_));
        assert_matches!(run, Workout::Running(_));
        assert_matches!(walk, Workout::SportsWalking(_));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            read_packet("XYZ", &[1.0, 2.0, 3.0]),
            Err(Error::InvalidWorkoutType("XYZ".to_string()))
        );
    }

    #[test]
    fn wrong_arity_is_rejected_per_tag() {
        assert_eq!(
            read_packet("RUN", &[15000.0, 1.0, 75.0, 180.0]),
            Err(Error::ArgumentMismatch {
                tag: "RUN",
                expected: 3,
                got: 4
            })
        );
        assert_eq!(
            read_packet("SWM", &[720.0, 1.0, 80.0]),
            Err(Error::ArgumentMismatch {
                tag: "SWM",
                expected: 5,
                got: 3
            })
        );
        assert_eq!(
            read_packet("WLK", &[]),
            Err(Error::ArgumentMismatch {
                tag: "WLK",
                expected: 4,
                got: 0
            })
        );
    }

    #[test]
    fn zero_duration_is_rejected_for_every_tag() {
        for (tag, values) in [
            ("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
            ("RUN", vec![15000.0, 0.0, 75.0]),
            ("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        ] {
            assert_eq!(
                read_packet(tag, &values),
                Err(Error::DivisionByZero {
                    quantity: "duration"
                }),
                "tag {tag} should reject a zero duration"
            );
        }
    }

    #[test]
    fn zero_walking_height_is_rejected() {
        assert_eq!(
            read_packet("WLK", &[9000.0, 1.0, 75.0, 0.0]),
            Err(Error::DivisionByZero { quantity: "height" })
        );
    }

    #[test]
    fn dispatch_matches_direct_construction() {
        let dispatched = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let direct = Swimming {
            effort: Effort {
                actions: 720,
                duration_h: 1.0,
                weight_kg: 80.0,
            },
            pool_length_m: 25,
            pool_laps: 40,
        };

        assert_eq!(dispatched, Workout::Swimming(direct));
        assert_eq!(dispatched.summary().distance_km, direct.distance_km());
        assert_eq!(dispatched.summary().mean_speed_kmh, direct.mean_speed_kmh());
        assert_eq!(dispatched.summary().calories_kcal, direct.calories_kcal());
    }

    #[test]
    fn packet_runs_through_to_a_workout() {
        let workout = Packet::parse("RUN 15000 1 75").unwrap().into_workout().unwrap();

        assert_eq!(workout.summary().workout, "Running");
    }
}
