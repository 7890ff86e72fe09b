//! Lead capture: form validation, usage estimates, and order-system redirects.

mod home_size;
mod redirect;
mod validation;

pub use home_size::{
    home_size_options, usage_for_category, HomeSize, HomeSizeOption, DEFAULT_USAGE_KWH,
};
pub use redirect::{build_redirect_url, RedirectUrlBuilder};
pub use validation::{
    FieldError, LeadField, LeadForm, LeadSubmission, LeadValidationError, HOME_SIZE_MESSAGE,
    ZIP_DIGITS_MESSAGE, ZIP_LENGTH_MESSAGE,
};
