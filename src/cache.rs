// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Caller-side memoization of per-symbol loop collections.
//!
//! Extraction itself is stateless; this explicit map lets a caller run it
//! once per distinct symbol and reuse the result for every placed
//! instance.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::loops::Loops;

/// A symbol-id keyed cache of extracted loop collections.
#[derive(Debug, Default)]
pub struct SymbolCache {
    loops: FxHashMap<String, Loops>,
}

impl SymbolCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached loops for a symbol, if already extracted.
    pub fn get(&self, symbol_id: &str) -> Option<&Loops> {
        self.loops.get(symbol_id)
    }

    /// The cached loops for a symbol, extracting them with `extract` on
    /// first use. A failed extraction leaves the cache unchanged.
    pub fn get_or_try_insert_with<F>(&mut self, symbol_id: &str, extract: F) -> Result<&Loops>
    where
        F: FnOnce() -> Result<Loops>,
    {
        if !self.loops.contains_key(symbol_id) {
            let loops = extract()?;
            self.loops.insert(symbol_id.to_owned(), loops);
        }
        Ok(&self.loops[symbol_id])
    }

    pub fn contains(&self, symbol_id: &str) -> bool {
        self.loops.contains_key(symbol_id)
    }

    pub fn len(&self) -> usize {
        self.loops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }
}
