//! Form identity used when reporting attached lights

use serde::{Deserialize, Serialize};
use std::fmt;

/// Load-order index reserved for light plugin files
const LIGHT_FILE_INDEX: u32 = 0xFE;

/// Where a form record came from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormOrigin {
    /// Created at runtime, not backed by any file
    #[default]
    Runtime,
    /// Defined by a plugin file in the load order
    File {
        /// Plugin file name, e.g. `Skyrim.esm`
        file_name: String,
    },
}

/// Identity of an effect shader record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormRecord {
    /// Editor ID, may be empty
    #[serde(default)]
    pub editor_id: String,
    /// Full load-order form ID
    pub form_id: u32,
    /// File or runtime origin
    #[serde(default)]
    pub origin: FormOrigin,
}

impl FormRecord {
    /// Record for a form defined in a plugin file
    pub fn from_file(editor_id: impl Into<String>, form_id: u32, file_name: impl Into<String>) -> Self {
        Self {
            editor_id: editor_id.into(),
            form_id,
            origin: FormOrigin::File {
                file_name: file_name.into(),
            },
        }
    }

    /// Record for a form created at runtime
    pub fn runtime(editor_id: impl Into<String>, form_id: u32) -> Self {
        Self {
            editor_id: editor_id.into(),
            form_id,
            origin: FormOrigin::Runtime,
        }
    }

    /// Form ID with the load-order index stripped
    pub const fn local_form_id(&self) -> u32 {
        if self.form_id >> 24 == LIGHT_FILE_INDEX {
            self.form_id & 0x0000_0FFF
        } else {
            self.form_id & 0x00FF_FFFF
        }
    }

    /// Plugin file name, if the form came from one
    pub fn file_name(&self) -> Option<&str> {
        match &self.origin {
            FormOrigin::File { file_name } => Some(file_name),
            FormOrigin::Runtime => None,
        }
    }

    /// Load-order independent key: `0x{local}~{file}`
    pub fn form_key(&self) -> Option<String> {
        self.file_name()
            .map(|file| format!("0x{:X}~{}", self.local_form_id(), file))
    }
}

impl fmt::Display for FormRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            FormOrigin::Runtime => write!(f, "{} [0x{:X}]", self.editor_id, self.form_id),
            FormOrigin::File { file_name } => write!(
                f,
                "{} [0x{:X}~{}]",
                self.editor_id,
                self.local_form_id(),
                file_name
            ),
        }
    }
}
