mod footer;
mod fields;
mod output;

pub use fields::render_form;
pub use footer::render_footer;
pub use output::render_output;
