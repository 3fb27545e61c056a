/// One virtual machine as reported by the management tool.
///
/// `id` is unique within a listing, `name` is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VmRecord {
    /// Display label.
    pub name: String,
    /// Opaque identifier passed back to the tool (usually a UUID).
    pub id: String,
}

impl VmRecord {
    /// Create a record from a name and id.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
