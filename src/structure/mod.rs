//! Structure mapping: document tree to logical structure tree.
//!
//! The mapper walks the primary content container depth-first and assigns
//! each recognized element a [`Role`]. Lists coerce every direct child into a
//! list item, tables map rows and cells by context, and unrecognized markup is
//! transparent so its content lands in the nearest mapped ancestor.
//!
//! # Example
//!
//! ```
//! use tagwright::dom::parse_html;
//! use tagwright::structure::{map_to_structure, Role};
//!
//! let dom = parse_html("<h1>Report</h1><ul><li>One</li><li>Two</li></ul>").unwrap();
//! let tree = map_to_structure(&dom);
//!
//! assert_eq!(tree.role, Role::Document);
//! assert_eq!(tree.children[0].role, Role::H1);
//! assert_eq!(tree.children[1].children.len(), 2);
//! ```

mod node;
mod role_map;
mod transform;

pub use node::{Role, StructureIter, StructureNode};
pub use role_map::{Assignment, Tag, assign};
pub use transform::{map_subtree, map_to_structure};
