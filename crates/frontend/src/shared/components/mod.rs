pub mod action_button;
pub mod form_fields;
pub mod form_section;
pub mod notice;
pub mod page_header;
pub mod text_list_editor;

pub use action_button::{ActionButton, ButtonVariant};
pub use form_fields::{FormInput, FormSelect, FormTextarea};
pub use form_section::FormSection;
pub use notice::{Notice, NoticeBar, NoticeKind};
pub use page_header::PageHeader;
pub use text_list_editor::TextListEditor;
