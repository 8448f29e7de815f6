use serde::Deserialize;
use serde_aux::field_attributes::deserialize_default_from_null;

pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Contact form payload as it arrives from the website. Every field is
/// optional on the wire: absent or null text fields become empty strings
/// and an absent or null phone becomes NULL in storage. Nothing is
/// rejected or normalized.
#[derive(Debug, Deserialize)]
pub struct InquiryBody {
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub message: String,
}

impl From<InquiryBody> for NewInquiry {
    fn from(body: InquiryBody) -> Self {
        NewInquiry {
            name: body.name,
            email: body.email,
            phone: body.phone,
            message: body.message,
        }
    }
}
