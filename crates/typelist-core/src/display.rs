use std::fmt;
use std::marker::PhantomData;

use crate::reflect::Reflect;

/// Configuration for [`TypeListDisplay`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// strip module paths off the type names
    #[cfg_attr(feature = "serde", serde(default = "defaults::default_short_names"))]
    pub short_names: bool,

    /// placed between two adjacent elements
    #[cfg_attr(feature = "serde", serde(default = "defaults::default_separator"))]
    pub separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            short_names: defaults::default_short_names(),
            separator: defaults::default_separator(),
        }
    }
}

mod defaults {
    pub(super) const DEFAULT_SHORT_NAMES: bool = true;
    pub(super) const DEFAULT_SEPARATOR: &str = ", ";

    pub(super) fn default_short_names() -> bool {
        DEFAULT_SHORT_NAMES
    }

    pub(super) fn default_separator() -> String {
        DEFAULT_SEPARATOR.to_owned()
    }
}

/// Renders the list `L` as `[A, B, C]`.
pub fn display<L>() -> TypeListDisplay<L>
where
    L: Reflect,
{
    TypeListDisplay { config: Default::default(), list: PhantomData }
}

pub struct TypeListDisplay<L> {
    config: DisplayConfig,
    list: PhantomData<fn() -> L>,
}

impl<L> TypeListDisplay<L> {
    pub fn with_config(self, config: DisplayConfig) -> Self {
        Self { config, ..self }
    }

    pub fn short_names(self, short_names: bool) -> Self {
        Self { config: DisplayConfig { short_names, ..self.config }, ..self }
    }

    pub fn separator(self, separator: impl Into<String>) -> Self {
        Self { config: DisplayConfig { separator: separator.into(), ..self.config }, ..self }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
}

impl<L> fmt::Debug for TypeListDisplay<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeListDisplay").field("config", &self.config).finish()
    }
}

impl<L> fmt::Display for TypeListDisplay<L>
where
    L: Reflect,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for info in L::type_infos() {
            if info.index > 0 {
                write!(f, "{}", self.config.separator)?;
            }
            if self.config.short_names {
                write!(f, "{}", short_type_name(info.name))?;
            } else {
                write!(f, "{}", info.name)?;
            }
        }
        write!(f, "]")
    }
}

/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name(name: &str) -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let mut out = String::with_capacity(name.len());
    let mut token_start = 0;
    for (pos, c) in name.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '&' | '*' | '(' | ')' | '[' | ']' | ';') {
            out.push_str(last_segment(&name[token_start..pos]));
            out.push(c);
            token_start = pos + c.len_utf8();
        }
    }
    out.push_str(last_segment(&name[token_start..]));
    out
}
