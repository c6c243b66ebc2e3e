//! Navigation session: load state, event dispatch and view projection.
//!
//! A session starts in [`LoadState::Loading`] and accepts no interaction until
//! the single catalog fetch resolves. From then on a [`Navigator`] borrows the
//! frozen tree and turns [`Event`]s into new path / expansion snapshots. Every
//! event is validated against the current projection before anything is
//! replaced, so a rejected event leaves the session exactly as it was.

use crate::core::accordion::{AccordionProjector, AccordionRow};
use crate::core::catalog::{CatalogSource, CatalogTree};
use crate::core::columns::{Column, ColumnProjector};
use crate::core::error::{CatalogNavigatorError, Result};
use crate::core::expansion::ExpansionSet;
use crate::core::navigation::NavigationPath;
use crate::core::node::ProductNode;
use crate::core::related::related_products;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen layout of the navigator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Multi-column breadcrumb rail
    #[default]
    Wide,
    /// Collapsible accordion
    Compact,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Wide => "wide",
            Layout::Compact => "compact",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = CatalogNavigatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(Layout::Wide),
            "compact" => Ok(Layout::Compact),
            _ => Err(CatalogNavigatorError::invalid_layout(s)),
        }
    }
}

/// User interaction. Item, column, row and crumb numbers are 1-based as shown
/// on screen; crumb `0` is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Select { column: usize, item: usize },
    Open { item: usize },
    Toggle { row: usize },
    Breadcrumb { crumb: usize },
    Back,
    Search(String),
    ClearSearch,
    Related { item: usize },
    SwitchLayout(Layout),
}

/// Catalog fetch state. Resolves once; later resolves are ignored.
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(CatalogTree),
}

impl LoadState {
    /// Fetch from `source` and resolve in one step
    pub fn fetch<S: CatalogSource>(source: S) -> Self {
        let mut state = LoadState::Loading;
        let description = source.describe();
        log::debug!("Fetching catalog from {description}");
        state.resolve(source.fetch());
        state
    }

    /// Settle the fetch. A failed fetch settles on an empty catalog; the
    /// failure only goes to the log.
    ///
    /// Returns `false` if the state had already resolved.
    pub fn resolve(&mut self, result: Result<CatalogTree>) -> bool {
        if let LoadState::Ready(_) = self {
            log::warn!("Catalog already loaded; ignoring second fetch result");
            return false;
        }
        let tree = match result {
            Ok(tree) => {
                log::debug!("Catalog loaded with {} nodes", tree.node_count());
                tree
            }
            Err(e) => {
                log::error!("Error loading products: {e}");
                CatalogTree::empty()
            }
        };
        *self = LoadState::Ready(tree);
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn tree(&self) -> Result<&CatalogTree> {
        match self {
            LoadState::Loading => Err(CatalogNavigatorError::CatalogNotLoaded),
            LoadState::Ready(tree) => Ok(tree),
        }
    }

    /// Start navigating. Fails while the catalog is still loading.
    pub fn navigator(&self, layout: Layout) -> Result<Navigator<'_>> {
        Ok(Navigator::new(self.tree()?, layout))
    }
}

/// Product shown on the detail view with its siblings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub product: &'a ProductNode,
    pub related: Vec<&'a ProductNode>,
}

/// What the renderer should draw for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Detail(DetailView<'a>),
    Columns(Vec<Column<'a>>),
    Accordion(Vec<AccordionRow<'a>>),
}

pub struct Navigator<'a> {
    tree: &'a CatalogTree,
    layout: Layout,
    path: NavigationPath<'a>,
    expansion: ExpansionSet,
    query: String,
}

impl<'a> Navigator<'a> {
    pub fn new(tree: &'a CatalogTree, layout: Layout) -> Self {
        Self {
            tree,
            layout,
            path: NavigationPath::new(),
            expansion: ExpansionSet::new(),
            query: String::new(),
        }
    }

    pub fn tree(&self) -> &'a CatalogTree {
        self.tree
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn path(&self) -> &NavigationPath<'a> {
        &self.path
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_product(&self) -> Option<&'a ProductNode> {
        self.path.current_product()
    }

    pub fn columns(&self) -> Vec<Column<'a>> {
        ColumnProjector::new(self.tree, &self.path).columns(&self.query)
    }

    pub fn rows(&self) -> Vec<AccordionRow<'a>> {
        AccordionProjector::new(self.tree, &self.expansion).rows(&self.query)
    }

    pub fn view(&self) -> View<'a> {
        if let Some(product) = self.current_product() {
            return View::Detail(DetailView {
                product,
                related: related_products(&self.path),
            });
        }
        match self.layout {
            Layout::Wide => View::Columns(self.columns()),
            Layout::Compact => View::Accordion(self.rows()),
        }
    }

    /// Apply one event. On error the session is left unchanged.
    pub fn apply(&mut self, event: Event) -> Result<()> {
        log::debug!("Applying {event:?}");
        let result = self.dispatch(event);
        debug_assert!(self.path.is_consistent());
        result
    }

    fn dispatch(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Select { column, item } => {
                self.require_layout("select", Layout::Wide)?;
                self.require_browsing("select")?;
                self.select_in_column(column, item)
            }
            Event::Open { item } => {
                self.require_browsing("open")?;
                match self.layout {
                    Layout::Wide => {
                        let active = ColumnProjector::new(self.tree, &self.path).active_index();
                        self.select_in_column(active + 1, item)
                    }
                    Layout::Compact => self.toggle_row(item),
                }
            }
            Event::Toggle { row } => {
                self.require_layout("toggle", Layout::Compact)?;
                self.require_browsing("toggle")?;
                self.toggle_row(row)
            }
            Event::Breadcrumb { crumb } => {
                if crumb > self.path.len() {
                    return Err(CatalogNavigatorError::breadcrumb_out_of_range(
                        crumb,
                        self.path.len(),
                    ));
                }
                let index = crumb.checked_sub(1);
                self.path = self.path.navigate_breadcrumb(index);
                Ok(())
            }
            Event::Back => {
                self.path = self.path.back();
                Ok(())
            }
            Event::Search(query) => {
                self.query = query;
                Ok(())
            }
            Event::ClearSearch => {
                self.query.clear();
                Ok(())
            }
            Event::Related { item } => {
                if self.current_product().is_none() {
                    return Err(CatalogNavigatorError::NotInDetailView);
                }
                let related = related_products(&self.path);
                let node = related[position(related.len(), item)?];
                self.path = self.path.select_related(node);
                Ok(())
            }
            Event::SwitchLayout(layout) => {
                self.layout = layout;
                Ok(())
            }
        }
    }

    fn select_in_column(&mut self, column: usize, item: usize) -> Result<()> {
        let columns = self.columns();
        let target = column
            .checked_sub(1)
            .and_then(|index| columns.iter().find(|c| c.index == index))
            .ok_or(CatalogNavigatorError::ColumnNotVisible { column })?;
        let node = target.items[position(target.items.len(), item)?];
        self.path = self.path.select(node, target.index);
        Ok(())
    }

    fn toggle_row(&mut self, row: usize) -> Result<()> {
        let rows = self.rows();
        let row = &rows[position(rows.len(), row)?];
        if row.is_leaf() {
            self.path = row.selection_path();
        } else {
            self.expansion = self.expansion.toggle(self.tree, row.node, row.parent());
        }
        Ok(())
    }

    fn require_layout(&self, command: &str, layout: Layout) -> Result<()> {
        if self.layout == layout {
            Ok(())
        } else {
            Err(CatalogNavigatorError::wrong_layout(command, layout.as_str()))
        }
    }

    fn require_browsing(&self, command: &str) -> Result<()> {
        if self.current_product().is_some() {
            Err(CatalogNavigatorError::in_detail_view(command))
        } else {
            Ok(())
        }
    }
}

/// Map a 1-based on-screen number onto an index into a list of `len` items
fn position(len: usize, number: usize) -> Result<usize> {
    if len == 0 {
        return Err(CatalogNavigatorError::NoItemsAvailable);
    }
    if number == 0 {
        return Err(CatalogNavigatorError::ZeroIndex);
    }
    if number > len {
        return Err(CatalogNavigatorError::item_out_of_range(number, len));
    }
    Ok(number - 1)
}
