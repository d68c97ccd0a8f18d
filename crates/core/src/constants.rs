/// Separator used when goal ids and titles are flattened into a single column
/// of an entry listing.
pub const GOAL_LIST_DELIMITER: &str = ",";
