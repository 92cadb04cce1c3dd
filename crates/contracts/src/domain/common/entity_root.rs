use super::EntityKey;

/// Root of an entity managed by the back office
///
/// Carries the per-record accessors the list and details screens need plus the
/// static names used for API routes and UI captions.
pub trait EntityRoot {
    type Key: EntityKey;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Route key of the record, if the record carries one
    fn key(&self) -> Option<Self::Key>;

    /// Caption shown in lists
    fn title(&self) -> &str;

    // ============================================================================
    // Entity metadata
    // ============================================================================

    /// Collection segment of the API route (e.g. "projects")
    fn collection_name() -> &'static str;

    /// UI name of a single element
    fn element_name() -> &'static str;

    /// UI name of the list
    fn list_name() -> &'static str;
}
