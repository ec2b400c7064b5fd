use std::fmt;
use std::str::FromStr;

/// The kinds of insight analysis the pipeline can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisType {
    /// Thought patterns, interests, and activity trends
    Domi,
    /// Emotional shifts, stressors, and energy levels
    Aga,
}

impl AnalysisType {
    /// All analysis types, in documentation order
    pub const ALL: [AnalysisType; 2] = [AnalysisType::Domi, AnalysisType::Aga];

    /// The CLI token for this analysis type
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Domi => "domi",
            AnalysisType::Aga => "aga",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domi" => Ok(AnalysisType::Domi),
            "aga" => Ok(AnalysisType::Aga),
            _ => Err(format!(
                "Unknown analysis type: '{}'. Valid types: {}",
                s,
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_tokens() {
        for analysis in AnalysisType::ALL {
            assert_eq!(analysis.as_str().parse::<AnalysisType>().unwrap(), analysis);
        }
    }

    #[test]
    fn test_unknown_token_lists_valid_types() {
        let err = "comprehensive".parse::<AnalysisType>().unwrap_err();
        assert!(err.contains("domi"));
        assert!(err.contains("aga"));
    }
}
