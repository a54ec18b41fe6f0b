use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::types::{FinalPlanTurn, PlainTurn, QuestionTurn};

/// One response from the conversational endpoint.
///
/// The wire format tags the variant with a `type` field. Recognized tags are
/// `question` and `final_plan`; everything else decodes as [`PlainTurn`] from
/// the response's `text` field. A response with neither a recognized tag nor
/// a string `text` field is a decode error, not a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigatorTurn {
    /// A follow-up question with answer options.
    Question(QuestionTurn),

    /// The terminal turn carrying the generated plan.
    FinalPlan(FinalPlanTurn),

    /// A plain message.
    Plain(PlainTurn),
}

impl NavigatorTurn {
    /// Returns true if this turn is a question.
    pub fn is_question(&self) -> bool {
        matches!(self, NavigatorTurn::Question(_))
    }

    /// Returns true if this turn is a final plan.
    pub fn is_final_plan(&self) -> bool {
        matches!(self, NavigatorTurn::FinalPlan(_))
    }

    /// Returns true if this turn is a plain message.
    pub fn is_plain(&self) -> bool {
        matches!(self, NavigatorTurn::Plain(_))
    }

    /// Returns the turn's text regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            NavigatorTurn::Question(turn) => &turn.text,
            NavigatorTurn::FinalPlan(turn) => &turn.text,
            NavigatorTurn::Plain(turn) => &turn.text,
        }
    }

    /// Returns a reference to the inner QuestionTurn if this is a Question
    /// variant, or None otherwise.
    pub fn as_question(&self) -> Option<&QuestionTurn> {
        match self {
            NavigatorTurn::Question(turn) => Some(turn),
            _ => None,
        }
    }

    /// Returns a reference to the inner FinalPlanTurn if this is a FinalPlan
    /// variant, or None otherwise.
    pub fn as_final_plan(&self) -> Option<&FinalPlanTurn> {
        match self {
            NavigatorTurn::FinalPlan(turn) => Some(turn),
            _ => None,
        }
    }
}

impl From<QuestionTurn> for NavigatorTurn {
    fn from(turn: QuestionTurn) -> Self {
        NavigatorTurn::Question(turn)
    }
}

impl From<FinalPlanTurn> for NavigatorTurn {
    fn from(turn: FinalPlanTurn) -> Self {
        NavigatorTurn::FinalPlan(turn)
    }
}

impl From<PlainTurn> for NavigatorTurn {
    fn from(turn: PlainTurn) -> Self {
        NavigatorTurn::Plain(turn)
    }
}

impl Serialize for NavigatorTurn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(tag = "type", rename_all = "snake_case")]
        enum Tagged<'a> {
            Question(&'a QuestionTurn),
            FinalPlan(&'a FinalPlanTurn),
            Plain(&'a PlainTurn),
        }

        let tagged = match self {
            NavigatorTurn::Question(turn) => Tagged::Question(turn),
            NavigatorTurn::FinalPlan(turn) => Tagged::FinalPlan(turn),
            NavigatorTurn::Plain(turn) => Tagged::Plain(turn),
        };
        tagged.serialize(serializer)
    }
}

// Deserialization is by hand because the fallback arm accepts any tag, which
// a derived internally-tagged enum cannot express.
impl<'de> Deserialize<'de> for NavigatorTurn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.get("type").and_then(|tag| tag.as_str()) {
            Some("question") => serde_json::from_value::<QuestionTurn>(value.clone())
                .map(NavigatorTurn::Question)
                .map_err(de::Error::custom),
            Some("final_plan") => serde_json::from_value::<FinalPlanTurn>(value.clone())
                .map(NavigatorTurn::FinalPlan)
                .map_err(de::Error::custom),
            _ => {
                let text = value
                    .get("text")
                    .and_then(|text| text.as_str())
                    .ok_or_else(|| de::Error::missing_field("text"))?;
                Ok(NavigatorTurn::Plain(PlainTurn::new(text)))
            }
        }
    }
}
