// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespaced resource operations, grouped by API group the way the
//! underlying clients are.

pub mod apps;
pub mod batch;
pub mod configmaps;
pub mod core;
pub mod delete;
pub mod secrets;

/// Kebab-case a resource name so it is a valid object name regardless
/// of how the caller spells it (`myConfig` becomes `my-config`).
pub(crate) fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_lower = false;
    for ch in input.chars() {
        if matches!(ch, ' ' | '_' | '-' | '.') {
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out.trim_end_matches('-').to_string()
}
