//! Filter builder for the list endpoint
//!
//! Turns raw query strings into a typed [`ListingFilter`]. A range predicate
//! is only added when both of its bounds are supplied; one bound on its own
//! is ignored.

use crate::contract::{ListingError, ListingFields};
use std::str::FromStr;

/// Inclusive range predicate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBound<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> RangeBound<T> {
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Conjunction of optional predicates over listing fields.
///
/// The default (all `None`) matches every listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub market_price: Option<RangeBound<f64>>,
    pub beds: Option<RangeBound<u32>>,
    pub baths: Option<RangeBound<u32>>,
    pub sqft: Option<RangeBound<u32>>,
    pub year_built: Option<RangeBound<u32>>,
    /// Exact-match alternatives for `state`
    pub states: Option<Vec<String>>,
    /// Exact-match alternatives for `city`
    pub cities: Option<Vec<String>>,
}

impl ListingFilter {
    /// Evaluate the filter against a listing's fields
    pub fn matches(&self, fields: &ListingFields) -> bool {
        fn range<T: PartialOrd>(bound: &Option<RangeBound<T>>, value: &T) -> bool {
            bound.as_ref().map_or(true, |b| b.contains(value))
        }
        fn one_of(set: &Option<Vec<String>>, value: &str) -> bool {
            set.as_ref().map_or(true, |s| s.iter().any(|v| v == value))
        }

        range(&self.market_price, &fields.market_price)
            && range(&self.beds, &fields.beds)
            && range(&self.baths, &fields.baths)
            && range(&self.sqft, &fields.sqft)
            && range(&self.year_built, &fields.year_built)
            && one_of(&self.states, &fields.state)
            && one_of(&self.cities, &fields.city)
    }
}

/// Raw list query parameters, exactly as received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    pub market_price_min: Option<String>,
    pub market_price_max: Option<String>,
    pub beds_min: Option<String>,
    pub beds_max: Option<String>,
    pub baths_min: Option<String>,
    pub baths_max: Option<String>,
    pub sqft_min: Option<String>,
    pub sqft_max: Option<String>,
    pub year_built_min: Option<String>,
    pub year_built_max: Option<String>,
    pub states: Option<String>,
    pub cities: Option<String>,
}

/// Build a filter from raw query parameters
pub fn build_filter(params: &FilterParams) -> Result<ListingFilter, ListingError> {
    let market_price = range_bound::<f64>(
        ("market_price_min", &params.market_price_min),
        ("market_price_max", &params.market_price_max),
    )?;
    if let Some(bound) = &market_price {
        for (param, value) in [("market_price_min", bound.min), ("market_price_max", bound.max)] {
            if !value.is_finite() {
                return Err(ListingError::InvalidFilter {
                    param: param.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    Ok(ListingFilter {
        market_price,
        beds: range_bound(("beds_min", &params.beds_min), ("beds_max", &params.beds_max))?,
        baths: range_bound(("baths_min", &params.baths_min), ("baths_max", &params.baths_max))?,
        sqft: range_bound(("sqft_min", &params.sqft_min), ("sqft_max", &params.sqft_max))?,
        year_built: range_bound(
            ("year_built_min", &params.year_built_min),
            ("year_built_max", &params.year_built_max),
        )?,
        states: value_set(&params.states),
        cities: value_set(&params.cities),
    })
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn range_bound<T: FromStr>(
    (min_name, min): (&str, &Option<String>),
    (max_name, max): (&str, &Option<String>),
) -> Result<Option<RangeBound<T>>, ListingError> {
    let (Some(min), Some(max)) = (present(min), present(max)) else {
        return Ok(None);
    };
    Ok(Some(RangeBound {
        min: parse_bound(min_name, min)?,
        max: parse_bound(max_name, max)?,
    }))
}

fn parse_bound<T: FromStr>(param: &str, raw: &str) -> Result<T, ListingError> {
    raw.parse().map_err(|_| ListingError::InvalidFilter {
        param: param.to_string(),
        value: raw.to_string(),
    })
}

fn value_set(value: &Option<String>) -> Option<Vec<String>> {
    present(value).map(|v| v.split(',').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn listing(state: &str, city: &str, beds: u32, price: f64) -> ListingFields {
        ListingFields {
            state: state.to_string(),
            city: city.to_string(),
            beds,
            market_price: price,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_params_build_empty_filter() {
        let filter = build_filter(&FilterParams::default()).unwrap();
        assert_eq!(filter, ListingFilter::default());
        assert!(filter.matches(&ListingFields::default()));
    }

    #[test]
    fn test_single_bound_is_ignored() {
        let filter = build_filter(&FilterParams {
            beds_min: s("2"),
            sqft_max: s("900"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter, ListingFilter::default());
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let filter = build_filter(&FilterParams {
            beds_min: s("2"),
            beds_max: s(""),
            states: s(""),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter, ListingFilter::default());
    }

    #[test]
    fn test_single_bound_is_not_parsed() {
        // a lone bound never reaches the parser, even when it is garbage
        let filter = build_filter(&FilterParams {
            baths_min: s("lots"),
            ..Default::default()
        })
        .unwrap();
        assert!(filter.baths.is_none());
    }

    #[test]
    fn test_both_bounds_build_inclusive_range() {
        let filter = build_filter(&FilterParams {
            beds_min: s("2"),
            beds_max: s("4"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter.beds, Some(RangeBound { min: 2, max: 4 }));
        assert!(filter.matches(&listing("CA", "LA", 2, 0.0)));
        assert!(filter.matches(&listing("CA", "LA", 4, 0.0)));
        assert!(!filter.matches(&listing("CA", "LA", 5, 0.0)));
        assert!(!filter.matches(&listing("CA", "LA", 1, 0.0)));
    }

    #[test]
    fn test_market_price_uses_query_bounds() {
        let filter = build_filter(&FilterParams {
            market_price_min: s("100000.50"),
            market_price_max: s("300000"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            filter.market_price,
            Some(RangeBound {
                min: 100_000.5,
                max: 300_000.0
            })
        );
        assert!(filter.matches(&listing("CA", "LA", 0, 250_000.0)));
        assert!(!filter.matches(&listing("CA", "LA", 0, 100_000.0)));
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        let err = build_filter(&FilterParams {
            sqft_min: s("1000"),
            sqft_max: s("big"),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            ListingError::InvalidFilter {
                param: "sqft_max".to_string(),
                value: "big".to_string()
            }
        );
        assert!(err.is_bad_request());
    }

    #[test]
    fn test_negative_count_bound_is_rejected() {
        let err = build_filter(&FilterParams {
            year_built_min: s("-1"),
            year_built_max: s("2000"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ListingError::InvalidFilter { param, .. } if param == "year_built_min"));
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        let err = build_filter(&FilterParams {
            market_price_min: s("0"),
            market_price_max: s("inf"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ListingError::InvalidFilter { param, .. } if param == "market_price_max"));
    }

    #[test]
    fn test_states_split_into_exact_alternatives() {
        let filter = build_filter(&FilterParams {
            states: s("CA,NY"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter.states, Some(vec!["CA".to_string(), "NY".to_string()]));
        assert!(filter.matches(&listing("CA", "LA", 0, 0.0)));
        assert!(filter.matches(&listing("NY", "NYC", 0, 0.0)));
        assert!(!filter.matches(&listing("TX", "Austin", 0, 0.0)));
        assert!(!filter.matches(&listing("ca", "LA", 0, 0.0)));
    }

    #[test]
    fn test_predicates_are_combined_with_and() {
        let filter = build_filter(&FilterParams {
            cities: s("Springfield"),
            states: s("IL"),
            beds_min: s("3"),
            beds_max: s("3"),
            ..Default::default()
        })
        .unwrap();
        assert!(filter.matches(&listing("IL", "Springfield", 3, 0.0)));
        assert!(!filter.matches(&listing("MO", "Springfield", 3, 0.0)));
        assert!(!filter.matches(&listing("IL", "Chicago", 3, 0.0)));
        assert!(!filter.matches(&listing("IL", "Springfield", 2, 0.0)));
    }
}
