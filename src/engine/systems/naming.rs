use std::collections::HashSet;

/// Display name given to entities holding an NFT frame
pub const NFT_NAME_BASE: &str = "nft";

/// Used when an asset name has no letters or digits left after camel-casing
pub const FALLBACK_ASSET_NAME: &str = "asset";

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
}

fn classify(c: char) -> Option<CharClass> {
    if c.is_numeric() {
        Some(CharClass::Digit)
    } else if c.is_uppercase() {
        Some(CharClass::Upper)
    } else if c.is_alphabetic() {
        Some(CharClass::Lower)
    } else {
        None
    }
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<CharClass> = None;

    for (i, &c) in chars.iter().enumerate() {
        let Some(class) = classify(c) else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        };

        let boundary = match (prev, class) {
            (None, _) => false,
            (Some(CharClass::Lower), CharClass::Upper) => true,
            (Some(CharClass::Digit), CharClass::Upper | CharClass::Lower) => true,
            (Some(CharClass::Upper | CharClass::Lower), CharClass::Digit) => true,
            // end of an acronym: "XMLHttp" splits before the H
            (Some(CharClass::Upper), CharClass::Upper) => {
                chars.get(i + 1).and_then(|&n| classify(n)) == Some(CharClass::Lower)
            }
            _ => false,
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(class);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `"Big Pine Tree"` → `"bigPineTree"`, `"pine_tree-01"` → `"pineTree01"`
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in split_words(input).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `base` if nobody holds it yet, otherwise `base` plus the lowest free suffix from 2 up
pub fn unique_name(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}{n}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Scene-wide naming accumulator, owned by a single forward translation
#[derive(Debug, Clone, Default)]
pub struct NamingState {
    nft_count: u32,
    assigned: HashSet<String>,
}

impl NamingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for the next NFT-bearing entity: `nft`, `nft2`, `nft3`...
    pub fn next_nft_name(&mut self) -> String {
        self.nft_count += 1;
        if self.nft_count == 1 {
            NFT_NAME_BASE.to_string()
        } else {
            format!("{}{}", NFT_NAME_BASE, self.nft_count)
        }
    }

    /// Camel-cased catalog name, made unique against every name assigned so far
    pub fn asset_entity_name(&self, asset_name: &str) -> String {
        let base = camel_case(asset_name);
        let base = if base.is_empty() { FALLBACK_ASSET_NAME.to_string() } else { base };
        unique_name(&base, &self.assigned)
    }

    pub fn record(&mut self, name: &str) {
        self.assigned.insert(name.to_string());
    }

    pub fn nft_count(&self) -> u32 {
        self.nft_count
    }
}
