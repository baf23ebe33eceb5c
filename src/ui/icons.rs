pub struct Icons;

impl Icons {
    pub const BOOK: &str = "📚";
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const DATABASE: &str = "🗄️";
    pub const POINTER: &str = "▶";
}
