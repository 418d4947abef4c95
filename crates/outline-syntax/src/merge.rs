//! Combine documents that share a name.
//!
//! Outline blocks for one package are often spread over many comments or
//! files; each parses into its own [`Document`]. This folds them together.

use crate::model::{Docs, Document};
use std::collections::HashMap;

/// Merge documents by name, one output document per distinct name.
///
/// Output order is the order in which each name was first seen. Later
/// documents are folded into the first with [`Document::merge`].
pub fn merge_by_name<I>(docs: I) -> Docs
where
    I: IntoIterator<Item = Document>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<Document> = Vec::new();

    for doc in docs {
        match index.get(&doc.name) {
            Some(&i) => merged[i].merge(doc),
            None => {
                index.insert(doc.name.clone(), merged.len());
                merged.push(doc);
            }
        }
    }

    merged.into()
}
