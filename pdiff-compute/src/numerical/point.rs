//! Variable bindings to evaluate expressions at.

use crate::consts::{self, is_reserved};
use levenshtein::levenshtein;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A set of values bound to variable names.
///
/// Every point starts with `e` and `pi` bound to their constants. Looking up a name that is not
/// bound gives `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// The value bound to each name.
    values: HashMap<String, f64>,

    /// The names bound by the user, in the order they were first bound.
    order: Vec<String>,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            values: HashMap::from([
                (String::from("e"), consts::E),
                (String::from("pi"), consts::PI),
            ]),
            order: Vec::new(),
        }
    }
}

impl Point {
    /// Reads a point from whitespace-separated `name value` pairs, such as `x 2 y -1.5`.
    ///
    /// A value that is missing or is not a number binds `NaN`. A name bound twice keeps its last
    /// value; this also applies to `e` and `pi`.
    pub fn new(bindings: &str) -> Self {
        let mut point = Self::default();
        let mut words = bindings.split_whitespace();
        while let Some(name) = words.next() {
            let value = match words.next() {
                Some(word) => word.parse().unwrap_or_else(|_| {
                    warn!(name, value = word, "binding is not a number, using NaN");
                    f64::NAN
                }),
                None => {
                    warn!(name, "binding has no value, using NaN");
                    f64::NAN
                },
            };
            point.add_var(name, value);
        }
        point
    }

    /// Binds the given value to a name, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        if self.values.insert(name.to_owned(), value).is_none() && !is_reserved(name) {
            self.order.push(name.to_owned());
        }
    }

    /// Returns the value bound to the name, or `0` if it is not bound.
    pub fn get(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(value) => *value,
            None => {
                let similar = self.get_similar_vars(name);
                debug!(name, ?similar, "variable is not bound, using 0");
                0.0
            },
        }
    }

    /// Returns the bound names that are spelled similarly to the given name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        self.values.keys()
            .filter(|bound| levenshtein(bound, name) < 2)
            .map(String::as_str)
            .collect()
    }

    /// Returns the names bound by the user, in the order they were first bound. The reserved
    /// constants are never included, even if they were rebound.
    pub fn variables(&self) -> &[String] {
        &self.order
    }
}
