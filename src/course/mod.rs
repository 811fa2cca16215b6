// SPDX-License-Identifier: MPL-2.0
//! Course catalog: the static content the application renders.
//!
//! The catalog is data, not code. A TOML file under `assets/course/` is
//! embedded into the binary and parsed at startup. Markup lacking a given
//! component (a module without a quiz, a section without prompts) is a normal
//! branch: the corresponding UI simply isn't rendered.
//!
//! The module count is derived from the catalog rather than hard-coded, so
//! both the completion percentage and the reading-progress blending use the
//! same source of truth.

use crate::config::defaults::DEFAULT_FILL_BLANK_TOLERANCE;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "assets/course/"]
struct Asset;

/// Course file name within the embedded asset folder.
const COURSE_FILE: &str = "course.toml";

/// A single-select quiz option.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuizOption {
    /// Stable value compared against the configured correct answer.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

/// A single-select quiz question with a configured correct answer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Quiz {
    pub prompt: String,
    pub options: Vec<QuizOption>,
    /// Value of the correct option.
    pub correct: String,
    /// Feedback shown for a correct selection.
    #[serde(default)]
    pub correct_feedback: Option<String>,
    /// Feedback shown for an incorrect selection.
    #[serde(default)]
    pub incorrect_feedback: Option<String>,
    /// Optional explanation appended to incorrect feedback.
    #[serde(default)]
    pub explanation: Option<String>,
}

/// A numeric fill-in-the-blank exercise.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FillBlank {
    pub prompt: String,
    /// Expected numeric answer.
    pub expected: f64,
    /// Absolute tolerance around the expected answer.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Optional placeholder shown in the empty input.
    #[serde(default)]
    pub placeholder: Option<String>,
}

fn default_tolerance() -> f64 {
    DEFAULT_FILL_BLANK_TOLERANCE
}

/// An exploratory dilemma: any selection reveals the explanation panel.
/// There is no correctness concept.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Dilemma {
    pub prompt: String,
    pub options: Vec<String>,
    /// Panel revealed once any option is selected.
    pub reveal: String,
}

/// A copyable prompt block (e.g. a worksheet prompt to paste elsewhere).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PromptBlock {
    pub title: String,
    pub text: String,
}

/// A content section within a module.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Section {
    pub title: String,
    pub body: String,
    /// Collapsible sections start collapsed and toggle open/closed.
    #[serde(default)]
    pub collapsible: bool,
}

/// One unit of course content.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Module {
    /// 1-based module number.
    pub number: u32,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
    #[serde(default)]
    pub fill_blanks: Vec<FillBlank>,
    #[serde(default)]
    pub dilemmas: Vec<Dilemma>,
    #[serde(default)]
    pub prompts: Vec<PromptBlock>,
}

impl Module {
    /// Page identifier used as the engagement store key.
    #[must_use]
    pub fn page_id(&self) -> String {
        format!("module-{}", self.number)
    }

    /// Whether this module carries any interactive exercise.
    #[must_use]
    pub fn has_exercises(&self) -> bool {
        !self.quizzes.is_empty() || !self.fill_blanks.is_empty() || !self.dilemmas.is_empty()
    }
}

/// The whole course catalog.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Course {
    pub title: String,
    pub modules: Vec<Module>,
}

impl Course {
    /// Loads and validates the embedded course catalog.
    pub fn load_embedded() -> Result<Self> {
        let file = Asset::get(COURSE_FILE)
            .ok_or_else(|| Error::Course(format!("missing embedded {}", COURSE_FILE)))?;
        let content = String::from_utf8_lossy(file.data.as_ref()).to_string();
        Self::parse(&content)
    }

    /// Parses a course catalog from TOML and validates module numbering.
    pub fn parse(content: &str) -> Result<Self> {
        let course: Course =
            toml::from_str(content).map_err(|e| Error::Course(e.to_string()))?;
        course.validate()?;
        Ok(course)
    }

    fn validate(&self) -> Result<()> {
        if self.modules.is_empty() {
            return Err(Error::Course("course has no modules".to_string()));
        }
        for (index, module) in self.modules.iter().enumerate() {
            let expected = index as u32 + 1;
            if module.number != expected {
                return Err(Error::Course(format!(
                    "module numbering gap: expected {}, found {}",
                    expected, module.number
                )));
            }
            for quiz in &module.quizzes {
                if !quiz.options.iter().any(|o| o.value == quiz.correct) {
                    return Err(Error::Course(format!(
                        "module {}: quiz answer '{}' matches no option",
                        module.number, quiz.correct
                    )));
                }
            }
        }
        Ok(())
    }

    /// Total number of modules in the course.
    #[must_use]
    pub fn module_count(&self) -> u32 {
        self.modules.len() as u32
    }

    /// Looks up a module by its 1-based number.
    #[must_use]
    pub fn module(&self, number: u32) -> Option<&Module> {
        self.modules.get(number.checked_sub(1)? as usize)
    }

    /// Number of the module preceding `number`, if any.
    #[must_use]
    pub fn previous_module(&self, number: u32) -> Option<u32> {
        (number > 1 && number <= self.module_count()).then(|| number - 1)
    }

    /// Number of the module following `number`, if any.
    #[must_use]
    pub fn next_module(&self, number: u32) -> Option<u32> {
        (number >= 1 && number < self.module_count()).then(|| number + 1)
    }
}
