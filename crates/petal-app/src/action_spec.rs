//! Command-line action specs: `TYPE@X,Y,Z` or `TYPE@X,Y,Z:INTENSITY`.

use std::str::FromStr;

use thiserror::Error;

use petal_core::commands::SimCommand;
use petal_core::enums::ActionType;
use petal_core::types::Vector3;

#[derive(Error, Debug, PartialEq)]
pub enum ParseActionError {
    #[error("missing `@` between action type and position in `{0}`")]
    MissingPosition(String),

    #[error("expected three comma-separated coordinates, got `{0}`")]
    BadPosition(String),

    #[error("invalid number `{0}`")]
    BadNumber(String),
}

/// An action requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpec {
    pub kind: ActionType,
    pub position: Vector3,
    pub intensity: Option<f64>,
}

impl ActionSpec {
    pub fn into_command(self) -> SimCommand {
        SimCommand::SubmitAction {
            kind: self.kind,
            position: self.position,
            intensity: self.intensity,
            user_id: None,
        }
    }
}

impl FromStr for ActionSpec {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once('@')
            .ok_or_else(|| ParseActionError::MissingPosition(s.to_string()))?;

        let (coords, intensity) = match rest.split_once(':') {
            Some((coords, intensity)) => (coords, Some(parse_number(intensity)?)),
            None => (rest, None),
        };

        let parts: Vec<&str> = coords.split(',').collect();
        let [x, y, z] = parts.as_slice() else {
            return Err(ParseActionError::BadPosition(coords.to_string()));
        };

        Ok(Self {
            kind: ActionType::from_name(kind.trim()),
            position: Vector3::new(parse_number(x)?, parse_number(y)?, parse_number(z)?),
            intensity,
        })
    }
}

fn parse_number(text: &str) -> Result<f64, ParseActionError> {
    text.trim()
        .parse()
        .map_err(|_| ParseActionError::BadNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_spec() {
        let spec: ActionSpec = "uplift@0.5,-1,2:0.75".parse().unwrap();
        assert_eq!(spec.kind, ActionType::Uplift);
        assert_eq!(spec.position, Vector3::new(0.5, -1.0, 2.0));
        assert_eq!(spec.intensity, Some(0.75));
    }

    #[test]
    fn intensity_is_optional() {
        let spec: ActionSpec = "connect@0,0,0".parse().unwrap();
        assert_eq!(spec.kind, ActionType::Connect);
        assert_eq!(spec.intensity, None);
    }

    #[test]
    fn unknown_type_is_accepted() {
        let spec: ActionSpec = "wave@1,1,1".parse().unwrap();
        assert_eq!(spec.kind, ActionType::Unknown);
    }

    #[test]
    fn rejects_malformed_specs() {
        assert_eq!(
            "grow".parse::<ActionSpec>(),
            Err(ParseActionError::MissingPosition("grow".into()))
        );
        assert_eq!(
            "grow@1,2".parse::<ActionSpec>(),
            Err(ParseActionError::BadPosition("1,2".into()))
        );
        assert_eq!(
            "grow@1,2,x".parse::<ActionSpec>(),
            Err(ParseActionError::BadNumber("x".into()))
        );
        assert_eq!(
            "grow@1,2,3:lots".parse::<ActionSpec>(),
            Err(ParseActionError::BadNumber("lots".into()))
        );
    }

    #[test]
    fn converts_to_submit_command() {
        let spec: ActionSpec = "heal@1,2,3:0.5".parse().unwrap();
        match spec.into_command() {
            SimCommand::SubmitAction {
                kind, intensity, ..
            } => {
                assert_eq!(kind, ActionType::Heal);
                assert_eq!(intensity, Some(0.5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
