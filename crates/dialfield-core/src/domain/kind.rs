use serde::Deserialize;

use crate::error::CoreError;

/// An input kind the field is configured to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Tel,
    Sid,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Tel => "tel",
            InputKind::Sid => "sid",
        }
    }
}

/// The field's accepted-input mode, derived from the configured kind list.
///
/// Invariant: built from a non-empty list with no duplicates, so at least
/// one of `tel`/`sid` is always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMode {
    tel: bool,
    sid: bool,
}

impl FieldMode {
    pub fn tel_only() -> Self {
        Self {
            tel: true,
            sid: false,
        }
    }

    pub fn sid_only() -> Self {
        Self {
            tel: false,
            sid: true,
        }
    }

    pub fn mixed() -> Self {
        Self {
            tel: true,
            sid: true,
        }
    }

    pub fn from_kinds(kinds: &[InputKind]) -> Result<Self, CoreError> {
        if kinds.is_empty() {
            return Err(CoreError::EmptyInputKinds);
        }
        let mut mode = Self {
            tel: false,
            sid: false,
        };
        for kind in kinds {
            let slot = match kind {
                InputKind::Tel => &mut mode.tel,
                InputKind::Sid => &mut mode.sid,
            };
            if *slot {
                return Err(CoreError::DuplicateInputKind(kind.as_str()));
            }
            *slot = true;
        }
        Ok(mode)
    }

    pub fn accepts_tel(&self) -> bool {
        self.tel
    }

    pub fn accepts_sid(&self) -> bool {
        self.sid
    }

    pub fn is_tel_only(&self) -> bool {
        self.tel && !self.sid
    }

    pub fn is_sid_only(&self) -> bool {
        self.sid && !self.tel
    }
}

impl Default for FieldMode {
    fn default() -> Self {
        Self::tel_only()
    }
}
