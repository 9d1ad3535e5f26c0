//! Disease class table and multi-hot label vectors.
//!
//! Every manifest record carries one binary flag per disease class. The flag
//! order on the wire is the order of [`CLASS_NAMES`]; that order is
//! load-bearing and must not change.

/// Number of disease classes in the label set.
pub const N_CLASSES: usize = 14;

/// Disease class names, in manifest column order.
pub const CLASS_NAMES: [&str; N_CLASSES] = [
    "Atelectasis",
    "Cardiomegaly",
    "Effusion",
    "Infiltration",
    "Mass",
    "Nodule",
    "Pneumonia",
    "Pneumothorax",
    "Consolidation",
    "Edema",
    "Emphysema",
    "Fibrosis",
    "Pleural_Thickening",
    "Hernia",
];

/// Errors that can occur when parsing the label columns of a record.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    /// The record did not carry exactly one flag per class
    #[error("expected {expected} label columns, found {0}", expected = N_CLASSES)]
    WrongArity(usize),

    /// A label column held something other than `0` or `1`
    #[error("label flag must be 0 or 1, found {0:?}")]
    BadFlag(String),
}

/// A fixed-length multi-hot label vector, one flag per disease class.
///
/// Immutable once parsed. Flag positions map one-to-one onto
/// [`CLASS_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVector([bool; N_CLASSES]);

impl LabelVector {
    /// Parses the label columns of one manifest record.
    ///
    /// Expects exactly [`N_CLASSES`] tokens, each `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::WrongArity`] for a wrong column count and
    /// [`LabelError::BadFlag`] for a non-binary token.
    pub fn parse(tokens: &[&str]) -> Result<Self, LabelError> {
        if tokens.len() != N_CLASSES {
            return Err(LabelError::WrongArity(tokens.len()));
        }

        let mut flags = [false; N_CLASSES];
        for (flag, token) in flags.iter_mut().zip(tokens) {
            *flag = match *token {
                "0" => false,
                "1" => true,
                other => return Err(LabelError::BadFlag(other.to_string())),
            };
        }

        Ok(Self(flags))
    }

    /// Yields the names of the active classes, in table order.
    pub fn active_classes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0
            .iter()
            .zip(CLASS_NAMES)
            .filter_map(|(&active, name)| active.then_some(name))
    }

    /// Number of active classes in this vector.
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&active| active).count()
    }
}
