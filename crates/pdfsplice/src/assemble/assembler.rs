//! Core page assembly implementation.
//!
//! Every output (split part, merge result, reordered copy) is built the same
//! way: pages are copied out of one or more sources into a fresh document with
//! a flat page tree.

use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;

use crate::assemble::OutputDocument;
use crate::error::{PdfSpliceError, Result};
use crate::io::SourceDocument;
use crate::pages::{PageIndexGroup, PageRangeSelector, SelectionPolicy, SplitPlan};
use crate::utils::reordered_name;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains in broken files.
const MAX_TREE_DEPTH: usize = 64;

/// Name of the merge output.
pub const MERGED_NAME: &str = "merged.pdf";

/// Pages to copy out of one source, in output order.
#[derive(Debug, Clone, Copy)]
pub struct PageSelection<'a> {
    /// Document the pages come from.
    pub source: &'a SourceDocument,

    /// Zero-based page indices; may repeat and be in any order.
    pub indices: &'a [usize],
}

impl<'a> PageSelection<'a> {
    /// Select `indices` from `source`.
    pub fn new(source: &'a SourceDocument, indices: &'a [usize]) -> Self {
        Self { source, indices }
    }
}

/// Builds new documents out of pages of loaded sources.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler;

impl DocumentAssembler {
    /// Create a new assembler.
    pub fn new() -> Self {
        Self
    }

    /// Split `source` into one output per group, in group order.
    ///
    /// Outputs are named by `plan` (`split_1.pdf` or `split_part_1.pdf`).
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::EmptySelection`] if there are no groups, and
    /// propagates assembly errors for any group.
    pub fn split(
        &self,
        source: &SourceDocument,
        groups: &[PageIndexGroup],
        plan: &SplitPlan,
    ) -> Result<Vec<OutputDocument>> {
        if groups.is_empty() {
            return Err(PdfSpliceError::EmptySelection);
        }

        groups
            .iter()
            .enumerate()
            .map(|(position, group)| {
                self.assemble(
                    plan.output_name(position + 1),
                    &[PageSelection::new(source, group.indices())],
                )
            })
            .collect()
    }

    /// Concatenate every page of every source, sources in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::NoFiles`] for an empty source list and
    /// [`PdfSpliceError::EmptySelection`] if the sources have no pages.
    pub fn merge(&self, sources: &[SourceDocument]) -> Result<OutputDocument> {
        if sources.is_empty() {
            return Err(PdfSpliceError::NoFiles);
        }

        let all_pages: Vec<Vec<usize>> = sources
            .iter()
            .map(|source| (0..source.page_count()).collect())
            .collect();

        let selections: Vec<PageSelection<'_>> = sources
            .iter()
            .zip(&all_pages)
            .map(|(source, indices)| PageSelection::new(source, indices))
            .collect();

        self.assemble(MERGED_NAME, &selections)
    }

    /// Rearrange the pages of `source` in the order given by a page range
    /// expression, e.g. `"3, 1-2"`.
    ///
    /// # Errors
    ///
    /// Propagates selection errors and returns
    /// [`PdfSpliceError::EmptySelection`] if nothing was selected.
    pub fn reorder(
        &self,
        source: &SourceDocument,
        order: &str,
        policy: SelectionPolicy,
    ) -> Result<OutputDocument> {
        let groups = PageRangeSelector::new(policy).select(order, source.page_count())?;
        let indices: Vec<usize> = groups.iter().flat_map(|group| group.iter()).collect();

        self.assemble(
            reordered_name(source.name()),
            &[PageSelection::new(source, &indices)],
        )
    }

    /// Build one document from the given selections, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PdfSpliceError::PageIndexOutOfBounds`] for an index outside
    /// a source's pages, [`PdfSpliceError::EmptySelection`] if no page is
    /// selected, and [`PdfSpliceError::AssemblyFailed`] if a source's page
    /// tree cannot be read.
    pub fn assemble(
        &self,
        name: impl Into<String>,
        selections: &[PageSelection<'_>],
    ) -> Result<OutputDocument> {
        let name = name.into();

        for selection in selections {
            let total_pages = selection.source.page_count();
            if let Some(&index) = selection.indices.iter().find(|&&i| i >= total_pages) {
                return Err(PdfSpliceError::PageIndexOutOfBounds {
                    document: selection.source.name().to_string(),
                    index,
                    total_pages,
                });
            }
        }

        if selections.iter().all(|s| s.indices.is_empty()) {
            return Err(PdfSpliceError::EmptySelection);
        }

        let version = highest_version(selections.iter().map(|s| s.source.document().version.as_str()));
        let mut output = Document::with_version(version);
        let pages_id = output.new_object_id();
        let mut kids = Vec::new();
        let mut info_copied = false;

        for selection in selections {
            if selection.indices.is_empty() {
                continue;
            }

            // Info comes from the first source that contributes pages.
            if !info_copied {
                copy_info(&mut output, selection.source.document());
                info_copied = true;
            }

            kids.extend(self.copy_pages(&mut output, selection, pages_id)?);
        }

        let page_count = kids.len();
        output.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter([
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(kids)),
                ("Count", Object::Integer(page_count as i64)),
            ])),
        );

        let catalog_id = output.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        output.trailer.set("Root", Object::Reference(catalog_id));

        output.prune_objects();
        output.renumber_objects();

        log::debug!("Assembled '{name}' with {page_count} page(s)");

        Ok(OutputDocument::new(name, output))
    }

    /// Copy the selected pages of one source into `output`, returning the new
    /// page references in selection order.
    fn copy_pages(
        &self,
        output: &mut Document,
        selection: &PageSelection<'_>,
        pages_id: ObjectId,
    ) -> Result<Vec<Object>> {
        let mut doc = selection.source.document().clone();
        doc.renumber_objects_with(output.max_id + 1);

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        if page_ids.len() != selection.source.page_count() {
            return Err(PdfSpliceError::assembly_failed(format!(
                "Page tree of '{}' changed while copying",
                selection.source.name()
            )));
        }

        let mut pages = Vec::with_capacity(selection.indices.len());
        let mut unique: HashSet<usize> = HashSet::new();
        for &index in selection.indices {
            if unique.insert(index) {
                pages.push((index, flattened_page(&doc, page_ids[index], pages_id)?));
            }
        }

        let copied_max_id = doc.objects.keys().map(|id| id.0).max().unwrap_or(0);
        output.objects.extend(doc.objects);
        output.max_id = output.max_id.max(doc.max_id).max(copied_max_id);

        for (index, page) in pages {
            output.objects.insert(page_ids[index], Object::Dictionary(page));
        }

        // The first use of a page keeps its object; repeats get a copy.
        let mut used = HashSet::new();
        let mut kids = Vec::with_capacity(selection.indices.len());
        for &index in selection.indices {
            let page_id = page_ids[index];
            if used.insert(index) {
                kids.push(Object::Reference(page_id));
            } else {
                let copy = output.get_dictionary(page_id)?.clone();
                kids.push(Object::Reference(output.add_object(copy)));
            }
        }

        Ok(kids)
    }
}

/// The page dictionary with inherited attributes made explicit and its
/// parent pointed at the output page tree.
fn flattened_page(doc: &Document, page_id: ObjectId, pages_id: ObjectId) -> Result<Dictionary> {
    let mut page = doc.get_dictionary(page_id)?.clone();

    for key in INHERITABLE_ATTRIBUTES {
        if !page.has(key)
            && let Some(value) = inherited_attribute(doc, &page, key)
        {
            page.set(key, value);
        }
    }

    page.set("Parent", Object::Reference(pages_id));
    Ok(page)
}

fn inherited_attribute(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent_id = page.get(b"Parent").and_then(Object::as_reference).ok();

    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(parent_id?).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent_id = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    None
}

/// Copy the document info dictionary of `source` as a new object of `output`.
fn copy_info(output: &mut Document, source: &Document) {
    let info = match source.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => source.get_dictionary(*id).ok().cloned(),
        Ok(Object::Dictionary(dict)) => Some(dict.clone()),
        _ => None,
    };

    if let Some(info) = info {
        // Values that point back into the source would dangle after pruning.
        let direct: Dictionary = info
            .iter()
            .filter(|(_, value)| !matches!(value, Object::Reference(_)))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let info_id = output.add_object(direct);
        output.trailer.set("Info", Object::Reference(info_id));
    }
}

/// Highest of the given PDF versions, `1.4` if there are none.
fn highest_version<'a>(versions: impl Iterator<Item = &'a str>) -> String {
    versions
        .max_by_key(|version| parse_version(version))
        .unwrap_or("1.4")
        .to_string()
}

fn parse_version(version: &str) -> (u32, u32) {
    let (major, minor) = version.trim().split_once('.').unwrap_or((version, "0"));
    (
        major.trim().parse().unwrap_or(0),
        minor.trim().parse().unwrap_or(0),
    )
}
