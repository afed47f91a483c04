//! # Interest Calculations
//!
//! The two functions here do **not** share a rate convention:
//!
//! | Function | Rate argument | 5% is passed as |
//! |----------|---------------|-----------------|
//! | [`simple_interest`] | percent | `5.0` |
//! | [`compound_interest`] | fraction | `0.05` |
//!
//! Periods are whole years and compounding counts are whole numbers, so both
//! take `i32`.

/// Simple interest earned over `years`
///
/// # Formula
/// I = P · (r / 100) · t
///
/// # Arguments
/// * `principal` - Amount invested, P
/// * `annual_rate_percent` - Annual rate r **in percent**
/// * `years` - Whole years, t
///
/// # Returns
/// The interest alone, not principal plus interest.
#[inline]
pub fn simple_interest(principal: f64, annual_rate_percent: f64, years: i32) -> f64 {
    principal * (annual_rate_percent / 100.0) * f64::from(years)
}

/// Final amount with periodic compounding
///
/// # Formula
/// A = P · (1 + r/n)^(n·t)
///
/// # Arguments
/// * `principal` - Amount invested, P
/// * `rate` - Annual rate r **as a fraction** (0.05 for 5%)
/// * `compounds_per_year` - Compounding periods per year, n. Expected to be
///   positive but not checked. With n = 0 the exponent is zero and IEEE
///   arithmetic returns `principal` unchanged.
/// * `years` - Whole years, t
///
/// # Returns
/// Principal plus accumulated interest.
///
/// # Example
/// ```rust
/// use formula_core::formulas::compound_interest;
///
/// let amount = compound_interest(100.0, 0.05, 1, 1);
/// assert_eq!(amount, 105.0);
/// ```
#[inline]
pub fn compound_interest(principal: f64, rate: f64, compounds_per_year: i32, years: i32) -> f64 {
    let n = f64::from(compounds_per_year);
    let periods = n * f64::from(years);
    principal * (1.0 + rate / n).powf(periods)
}
