use super::Criteria;
use crate::{
    error::{CriteriaError, Result},
    value::{
        Value,
        format::{MATCH_ALL, bound_token, float_token, value_token},
    },
};

impl Criteria {
    // ------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------

    /// Match `value` exactly. `Null` means "field has no value"; lists
    /// delegate to [`Self::r#in`].
    #[must_use]
    pub fn is(self, value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Null => self.is_null(),
            Value::List(values) => self.r#in(values),
            value => self.push(value_token(&value)),
        }
    }

    /// Match any of `values`, flattening nested lists depth-first.
    #[must_use]
    pub fn r#in<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().fold(self, |criteria, value| criteria.is(value))
    }

    // ------------------------------------------------------------------
    // Ranges
    // ------------------------------------------------------------------

    /// Inclusive range `[lower TO upper]`; `Null` leaves a side open.
    #[must_use]
    pub fn between(self, lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        self.between_with(lower, upper, true, true)
    }

    /// Range with explicit inclusivity per side (`[`/`]` vs `{`/`}`).
    #[must_use]
    pub fn between_with(
        self,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
        include_lower: bool,
        include_upper: bool,
    ) -> Self {
        let token = format!(
            "{}{} TO {}{}",
            if include_lower { '[' } else { '{' },
            bound_token(&lower.into()),
            bound_token(&upper.into()),
            if include_upper { ']' } else { '}' },
        );

        self.push(token)
    }

    #[must_use]
    pub fn less_than(self, upper: impl Into<Value>) -> Self {
        self.between_with(Value::Null, upper, true, false)
    }

    #[must_use]
    pub fn less_than_equal(self, upper: impl Into<Value>) -> Self {
        self.between(Value::Null, upper)
    }

    #[must_use]
    pub fn greater_than(self, lower: impl Into<Value>) -> Self {
        self.between_with(lower, Value::Null, false, true)
    }

    #[must_use]
    pub fn greater_than_equal(self, lower: impl Into<Value>) -> Self {
        self.between(lower, Value::Null)
    }

    /// Field has no value: `-field:[* TO *]`.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.is_not_null().not()
    }

    /// Field has any value: `field:[* TO *]`.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        self.push(MATCH_ALL.to_string())
    }

    // ------------------------------------------------------------------
    // Wildcards
    // ------------------------------------------------------------------

    /// `*value*` for each scalar of `value`.
    #[must_use]
    pub fn contains(self, value: impl Into<Value>) -> Self {
        self.push_each(&value.into(), |token| format!("*{token}*"))
    }

    /// `value*` for each scalar of `value`. Terms containing a space are
    /// rejected since the wildcard would only apply to the last word.
    pub fn starts_with(self, value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        self.check_wildcard_term(&value)?;

        Ok(self.push_each(&value, |token| format!("{token}*")))
    }

    /// `*value` for each scalar of `value`; same space rule as `starts_with`.
    pub fn ends_with(self, value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        self.check_wildcard_term(&value)?;

        Ok(self.push_each(&value, |token| format!("*{token}")))
    }

    fn check_wildcard_term(&self, value: &Value) -> Result<()> {
        let mut offending = None;
        value.for_each_scalar(&mut |scalar| {
            if offending.is_none() && scalar.contains_space() {
                offending = Some(scalar.raw_text());
            }
        });

        match offending {
            Some(term) => Err(self.rejected(CriteriaError::WhitespaceInWildcard(term))),
            None => Ok(()),
        }
    }

    // ------------------------------------------------------------------
    // Approximate matching
    // ------------------------------------------------------------------

    /// `value~` or `value~distance`, distance within `0.0..=1.0`.
    pub fn fuzzy(self, value: impl Into<Value>, distance: Option<f64>) -> Result<Self> {
        let suffix = match distance {
            Some(d) if !(0.0..=1.0).contains(&d) => {
                return Err(self.rejected(CriteriaError::FuzzyDistanceOutOfBounds(d)));
            }
            Some(d) => float_token(d),
            None => String::new(),
        };

        let token = format!("{}~{suffix}", value_token(&value.into()));

        Ok(self.push(token))
    }

    /// `"multi term phrase"~distance`.
    pub fn sloppy(self, phrase: &str, distance: i32) -> Result<Self> {
        if distance <= 0 {
            return Err(self.rejected(CriteriaError::InvalidSlop(distance)));
        }
        if !phrase.contains(' ') {
            return Err(self.rejected(CriteriaError::SingleTermPhrase(phrase.to_string())));
        }

        let token = format!("{}~{distance}", value_token(&Value::from(phrase)));

        Ok(self.push(token))
    }

    /// Append native query syntax verbatim, without any escaping.
    #[must_use]
    pub fn expression(self, raw: impl Into<String>) -> Self {
        self.push(raw.into())
    }

    // ------------------------------------------------------------------
    // Geo
    // ------------------------------------------------------------------

    /// `{!geofilt}`: great-circle distance from a point.
    pub fn within_circle(self, latitude: f64, longitude: f64, distance: f64) -> Result<Self> {
        self.geo_filter("geofilt", latitude, longitude, distance)
    }

    /// `{!bbox}`: bounding box of the circle; cheaper, but may match points
    /// outside the radius.
    pub fn near_circle(self, latitude: f64, longitude: f64, distance: f64) -> Result<Self> {
        self.geo_filter("bbox", latitude, longitude, distance)
    }

    fn geo_filter(
        mut self,
        filter: &str,
        latitude: f64,
        longitude: f64,
        distance: f64,
    ) -> Result<Self> {
        self.check_coordinates(&[latitude, longitude])?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(self.rejected(CriteriaError::InvalidDistance(distance)));
        }

        // the filter names the field itself
        let token = format!(
            "{{!{filter} pt={},{} sfield={} d={}}}",
            float_token(latitude),
            float_token(longitude),
            self.field(),
            float_token(distance),
        );
        self.focused_mut().hides_field = true;

        Ok(self.push(token))
    }

    /// Rectangular area `[lat1,lon1 TO lat2,lon2]`.
    pub fn within_box(
        self,
        start_latitude: f64,
        start_longitude: f64,
        end_latitude: f64,
        end_longitude: f64,
    ) -> Result<Self> {
        self.check_coordinates(&[start_latitude, start_longitude, end_latitude, end_longitude])?;

        let token = format!(
            "[{},{} TO {},{}]",
            float_token(start_latitude),
            float_token(start_longitude),
            float_token(end_latitude),
            float_token(end_longitude),
        );

        Ok(self.push(token))
    }

    // NaN and infinities would render as `NaN.0` / `inf.0`.
    fn check_coordinates(&self, coordinates: &[f64]) -> Result<()> {
        match coordinates.iter().find(|c| !c.is_finite()) {
            Some(&c) => Err(self.rejected(CriteriaError::NonFiniteCoordinate(c))),
            None => Ok(()),
        }
    }

    // ------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------

    /// Negate the focused leaf: `-field:...`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.focused_mut().negated = true;
        self
    }

    /// Boost the focused leaf: `field:...^factor`.
    pub fn boost(mut self, factor: f64) -> Result<Self> {
        if factor.is_nan() || factor < 0.0 {
            return Err(self.rejected(CriteriaError::InvalidBoost(factor)));
        }

        self.focused_mut().boost = Some(float_token(factor));

        Ok(self)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn push(mut self, token: String) -> Self {
        self.focused_mut().predicates.push(token);
        self
    }

    fn push_each(self, value: &Value, decorate: impl Fn(String) -> String) -> Self {
        let mut tokens = Vec::with_capacity(value.scalar_count());
        value.for_each_scalar(&mut |scalar| tokens.push(decorate(value_token(scalar))));

        tokens.into_iter().fold(self, Self::push)
    }
}
