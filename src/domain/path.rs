use std::{cmp::Ordering, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

static TECH_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^techs[./](\d+)[./](title|knowledge)$").expect("tech path pattern compiles")
});

/// Location of a single input (or the techs list itself) inside the form.
///
/// Displays as a dotted path such as `techs.1.title`, which is also the key
/// format used in error mappings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Name,
    Email,
    Password,
    Techs,
    TechTitle(usize),
    TechKnowledge(usize),
}

impl FieldPath {
    /// Convert a JSON pointer (`/techs/0/knowledge`) into a field path.
    pub fn from_pointer(pointer: &str) -> Option<Self> {
        let trimmed = pointer.strip_prefix('/')?;
        trimmed.parse().ok()
    }

    pub fn pointer(&self) -> String {
        format!("/{}", self.to_string().replace('.', "/"))
    }

    /// True for paths that address an editable input rather than the list.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldPath::Techs)
    }

    pub fn label(&self) -> String {
        match self {
            FieldPath::Name => "Name".to_string(),
            FieldPath::Email => "Email".to_string(),
            FieldPath::Password => "Password".to_string(),
            FieldPath::Techs => "Technologies".to_string(),
            FieldPath::TechTitle(index) => format!("Technology #{} title", index + 1),
            FieldPath::TechKnowledge(index) => format!("Technology #{} knowledge", index + 1),
        }
    }

    // Techs sorts after its entries: the list rule is reported last.
    fn order_key(&self) -> (u8, usize, u8) {
        match self {
            FieldPath::Name => (0, 0, 0),
            FieldPath::Email => (1, 0, 0),
            FieldPath::Password => (2, 0, 0),
            FieldPath::TechTitle(index) => (3, *index, 0),
            FieldPath::TechKnowledge(index) => (3, *index, 1),
            FieldPath::Techs => (4, 0, 0),
        }
    }
}

impl Ord for FieldPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for FieldPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => write!(f, "name"),
            FieldPath::Email => write!(f, "email"),
            FieldPath::Password => write!(f, "password"),
            FieldPath::Techs => write!(f, "techs"),
            FieldPath::TechTitle(index) => write!(f, "techs.{index}.title"),
            FieldPath::TechKnowledge(index) => write!(f, "techs.{index}.knowledge"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPathError {
    pub raw: String,
}

impl fmt::Display for FieldPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized field path `{}`", self.raw)
    }
}

impl std::error::Error for FieldPathError {}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "name" => return Ok(FieldPath::Name),
            "email" => return Ok(FieldPath::Email),
            "password" => return Ok(FieldPath::Password),
            "techs" => return Ok(FieldPath::Techs),
            _ => {}
        }
        let error = || FieldPathError {
            raw: raw.to_string(),
        };
        let captures = TECH_PATH.captures(raw).ok_or_else(error)?;
        let index = captures[1].parse::<usize>().map_err(|_| error())?;
        match &captures[2] {
            "title" => Ok(FieldPath::TechTitle(index)),
            _ => Ok(FieldPath::TechKnowledge(index)),
        }
    }
}
