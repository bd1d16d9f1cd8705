mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod edit_document_modal;
pub use edit_document_modal::EditDocumentModal;
