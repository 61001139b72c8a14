//! Numeric buckets.
//!
//! Selects such as the price range offer named ranges ("low", "mid", "high")
//! instead of raw numbers. The item attribute is parsed, mapped to the first
//! bucket whose range contains it, and the bucket name is compared with the
//! selected value.

/// A named half-open range: `min <= value < max`. Missing bounds are unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub name: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bucket {
    pub fn new(name: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value < max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketSpec {
    buckets: Vec<Bucket>,
}

impl BucketSpec {
    pub fn new(buckets: Vec<Bucket>) -> Self {
        Self { buckets }
    }

    /// Monthly rent ranges used by the property listing.
    pub fn price_ranges() -> Self {
        Self::new(vec![
            Bucket::new("low", None, Some(3000.0)),
            Bucket::new("mid", Some(3000.0), Some(6000.0)),
            Bucket::new("high", Some(6000.0), None),
        ])
    }

    pub fn bucket_for(&self, value: f64) -> Option<&str> {
        self.buckets
            .iter()
            .find(|bucket| bucket.contains(value))
            .map(|bucket| bucket.name.as_str())
    }

    /// Map a raw attribute to its bucket. Missing or malformed numbers map to nothing.
    pub fn classify(&self, raw: Option<&str>) -> Option<&str> {
        raw.and_then(parse_numeric)
            .and_then(|value| self.bucket_for(value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|bucket| bucket.name.as_str())
    }
}

pub fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_thresholds() {
        let spec = BucketSpec::price_ranges();

        assert_eq!(spec.bucket_for(0.0), Some("low"));
        assert_eq!(spec.bucket_for(2999.0), Some("low"));
        assert_eq!(spec.bucket_for(3000.0), Some("mid"));
        assert_eq!(spec.bucket_for(5999.0), Some("mid"));
        assert_eq!(spec.bucket_for(6000.0), Some("high"));
        assert_eq!(spec.bucket_for(250_000.0), Some("high"));
    }

    #[test]
    fn classify_parses_attribute() {
        let spec = BucketSpec::price_ranges();

        assert_eq!(spec.classify(Some("5999.50")), Some("mid"));
        assert_eq!(spec.classify(Some(" 2999 ")), Some("low"));
    }

    #[test]
    fn malformed_numbers_match_no_bucket() {
        let spec = BucketSpec::price_ranges();

        assert_eq!(spec.classify(Some("call for price")), None);
        assert_eq!(spec.classify(Some("")), None);
        assert_eq!(spec.classify(Some("NaN")), None);
        assert_eq!(spec.classify(Some("inf")), None);
        assert_eq!(spec.classify(None), None);
    }

    #[test]
    fn gaps_between_buckets_are_unmatched() {
        let spec = BucketSpec::new(vec![
            Bucket::new("studio", Some(0.0), Some(1.0)),
            Bucket::new("family", Some(3.0), None),
        ]);

        assert_eq!(spec.bucket_for(0.0), Some("studio"));
        assert_eq!(spec.bucket_for(2.0), None);
        assert_eq!(spec.bucket_for(4.0), Some("family"));
        assert_eq!(spec.bucket_for(-1.0), None);
    }

    #[test]
    fn names_in_declaration_order() {
        let spec = BucketSpec::price_ranges();
        let names: Vec<_> = spec.names().collect();
        assert_eq!(names, vec!["low", "mid", "high"]);
    }
}
