// Skills handling: free-text tag lists with suggestion promotion, and the
// read-only sortable table shown on the profile page.

pub mod table;
pub mod tags;

pub use table::{SkillsTable, SortColumn, SortDirection};
pub use tags::TagList;
