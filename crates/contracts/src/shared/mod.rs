pub mod api_response;
pub mod form_record;
