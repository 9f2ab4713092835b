//! Module: value
//! Responsibility: closed set of caller-supplied predicate inputs.
//! Does not own: escaping or token layout (see `value::format`).
//! Boundary: every builder argument converts into `Value` before use.

pub(crate) mod format;


use std::fmt::Display;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

///
/// Value
///
/// Input to a predicate call.
///
/// Null      → "no value"; as a range bound it renders `*`.
/// Timestamp → UTC `YYYY-MM-DDTHH:MM:SSZ` text, escaped like any other text.
/// List      → broadcast by the list-aware predicates, flattened depth-first.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Timestamp(String),
    List(Vec<Self>),
}

impl Value {
    /// Wildcard sentinel; passes through the formatter unescaped.
    pub const WILDCARD: &'static str = "*";

    /// Build a `Timestamp` from anything that can render itself in UTC.
    pub fn timestamp(value: &impl UtcTimestamp) -> Self {
        Self::Timestamp(value.utc_timestamp())
    }

    /// Stringify an arbitrary displayable value and treat it as text.
    pub fn display(value: &impl Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Build a list from any iterable of convertible items.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Number of scalar leaves once nested lists are flattened.
    #[must_use]
    pub fn scalar_count(&self) -> usize {
        match self {
            Self::List(items) => items.iter().map(Self::scalar_count).sum(),
            _ => 1,
        }
    }

    /// True when the raw (unescaped) text of this value contains a space.
    /// Lists answer for any of their elements.
    #[must_use]
    pub fn contains_space(&self) -> bool {
        match self {
            Self::Text(s) | Self::Timestamp(s) => s.contains(' '),
            Self::List(items) => items.iter().any(Self::contains_space),
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Uint(_) | Self::Float(_) => false,
        }
    }

    /// Raw text of a scalar, before any escaping.
    pub(crate) fn raw_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Uint(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Text(s) | Self::Timestamp(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(Self::raw_text)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Depth-first walk over the scalar leaves of this value.
    pub(crate) fn for_each_scalar<'a>(&'a self, f: &mut impl FnMut(&'a Self)) {
        match self {
            Self::List(items) => {
                for item in items {
                    item.for_each_scalar(f);
                }
            }
            scalar => f(scalar),
        }
    }
}

///
/// UtcTimestamp
///
/// Capability of a date/time type to render itself as UTC
/// `YYYY-MM-DDTHH:MM:SSZ`. Implemented for the `time` types, and for
/// `chrono` types behind the `chrono` feature.
///

pub trait UtcTimestamp {
    fn utc_timestamp(&self) -> String;
}

fn write_utc(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z")
}

impl UtcTimestamp for OffsetDateTime {
    fn utc_timestamp(&self) -> String {
        let utc = self.to_offset(UtcOffset::UTC);

        write_utc(
            utc.year(),
            utc.month().into(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second(),
        )
    }
}

// Naive date-times carry no offset and are read as UTC.
impl UtcTimestamp for PrimitiveDateTime {
    fn utc_timestamp(&self) -> String {
        self.assume_utc().utc_timestamp()
    }
}

impl UtcTimestamp for Date {
    fn utc_timestamp(&self) -> String {
        self.midnight().utc_timestamp()
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> UtcTimestamp for chrono::DateTime<Tz> {
    fn utc_timestamp(&self) -> String {
        self.with_timezone(&chrono::Utc)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }
}

#[cfg(feature = "chrono")]
impl UtcTimestamp for chrono::NaiveDateTime {
    fn utc_timestamp(&self) -> String {
        self.and_utc().utc_timestamp()
    }
}

///
/// Conversions
///

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($variant:ident => $target:ty: $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_number!(Int => i64: i8, i16, i32, i64);
impl_from_number!(Uint => u64: u8, u16, u32, u64);
impl_from_number!(Float => f64: f64);

// Widening keeps the binary value (0.1f32 -> 0.10000000149011612), so go
// through the shortest decimal form of the f32 instead.
impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value.to_string().parse().unwrap_or_else(|_| f64::from(value)))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Uint(u64::try_from(value).unwrap_or(u64::MAX))
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        let saturated = if value < 0 { i64::MIN } else { i64::MAX };

        Self::Int(i64::try_from(value).unwrap_or(saturated))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Self::timestamp(&value)
    }
}

impl From<PrimitiveDateTime> for Value {
    fn from(value: PrimitiveDateTime) -> Self {
        Self::timestamp(&value)
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Self::timestamp(&value)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value {
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Self::timestamp(&value)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Value {
    fn from(value: chrono::NaiveDateTime) -> Self {
        Self::timestamp(&value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::list(values)
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Self::list(values)
    }
}

impl<T: Clone + Into<Self>> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Self::list(values.iter().cloned())
    }
}
