//! UI languages and the message catalog.
//!
//! Lookups fall back to English when a Turkish entry is missing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Supported UI language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// Resolve a document language tag (`tr`, `tr-TR`, `en-US`, ...).
    ///
    /// Anything that does not start with `tr` is English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("tr") {
            Self::Tr
        } else {
            Self::En
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Look up a message.
    pub fn translate(self, message: Message) -> &'static str {
        match self {
            Self::En => english(message),
            Self::Tr => turkish(message).unwrap_or_else(|| english(message)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "tr" => Ok(Self::Tr),
            other => Err(ModelError::UnknownLocale(other.to_string())),
        }
    }
}

/// Catalog keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    // Titles and actions
    EmployeeList,
    AddEmployee,
    EditEmployee,
    Save,
    Cancel,
    Edit,
    Delete,
    NoResults,

    // Field labels
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    Phone,
    Email,
    Department,
    Position,

    // Value labels
    Analytics,
    Tech,
    Hr,
    Intern,
    Junior,
    Medior,
    Senior,
    Lead,

    // Validation
    Required,
    InvalidEmail,
    UniqueEmail,
    InvalidPhone,
    UniquePhone,
    AgeError,
    DateOrder,

    // Confirmation prompts
    ConfirmUpdate,
    ConfirmDelete,
    ConfirmDeleteEmployee,
    ConfirmDeleteSelected,
}

fn english(message: Message) -> &'static str {
    match message {
        Message::EmployeeList => "Employee List",
        Message::AddEmployee => "Add Employee",
        Message::EditEmployee => "Edit Employee",
        Message::Save => "Save",
        Message::Cancel => "Cancel",
        Message::Edit => "Edit",
        Message::Delete => "Delete",
        Message::NoResults => "No results found",
        Message::FirstName => "First Name",
        Message::LastName => "Last Name",
        Message::DateOfEmployment => "Date of Employment",
        Message::DateOfBirth => "Date of Birth",
        Message::Phone => "Phone",
        Message::Email => "Email",
        Message::Department => "Department",
        Message::Position => "Position",
        Message::Analytics => "Analytics",
        Message::Tech => "Technology",
        Message::Hr => "Human Resources",
        Message::Intern => "Intern",
        Message::Junior => "Junior",
        Message::Medior => "Medior",
        Message::Senior => "Senior",
        Message::Lead => "Lead",
        Message::Required => "is required",
        Message::InvalidEmail => "Invalid email address",
        Message::UniqueEmail => "This email address is already in use",
        Message::InvalidPhone => "Invalid phone number",
        Message::UniquePhone => "This phone number is already in use",
        Message::AgeError => "Age cannot be less than 18",
        Message::DateOrder => "Date of employment must be after date of birth",
        Message::ConfirmUpdate => "Are you sure you want to save the changes?",
        Message::ConfirmDelete => "Are you sure you want to delete?",
        Message::ConfirmDeleteEmployee => "employee. Are you sure you want to delete?",
        Message::ConfirmDeleteSelected => "selected employees. Are you sure you want to delete?",
    }
}

fn turkish(message: Message) -> Option<&'static str> {
    let text = match message {
        Message::EmployeeList => "Çalışan Listesi",
        Message::AddEmployee => "Çalışan Ekle",
        Message::EditEmployee => "Çalışanı Düzenle",
        Message::Save => "Kaydet",
        Message::Cancel => "İptal",
        Message::Edit => "Düzenle",
        Message::Delete => "Sil",
        Message::NoResults => "Sonuç bulunamadı",
        Message::FirstName => "Ad",
        Message::LastName => "Soyad",
        Message::DateOfEmployment => "İşe Başlama Tarihi",
        Message::DateOfBirth => "Doğum Tarihi",
        Message::Phone => "Telefon",
        Message::Email => "E-posta",
        Message::Department => "Departman",
        Message::Position => "Pozisyon",
        Message::Analytics => "Analitik",
        Message::Tech => "Teknoloji",
        Message::Hr => "İnsan Kaynakları",
        Message::Intern => "Stajyer",
        Message::Junior => "Junior",
        Message::Medior => "Medior",
        Message::Senior => "Senior",
        Message::Lead => "Lead",
        Message::Required => "zorunludur",
        Message::InvalidEmail => "Geçersiz e-posta adresi",
        Message::UniqueEmail => "Bu e-posta adresi zaten kullanılıyor",
        Message::InvalidPhone => "Geçersiz telefon numarası",
        Message::UniquePhone => "Bu telefon numarası zaten kullanılıyor",
        Message::AgeError => "Yaş 18'den küçük olamaz",
        Message::DateOrder => "İşe başlama tarihi doğum tarihinden sonra olmalı",
        Message::ConfirmUpdate => "Değişiklikleri kaydetmek istediğinizden emin misiniz?",
        Message::ConfirmDelete => "Silmek istediğinizden emin misiniz?",
        Message::ConfirmDeleteEmployee => "çalışanını silmek istediğinizden emin misiniz?",
        // No Turkish wording yet.
        Message::ConfirmDeleteSelected => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve_to_locales() {
        assert_eq!(Locale::from_tag("tr-TR"), Locale::Tr);
        assert_eq!(Locale::from_tag("TR"), Locale::Tr);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("de"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn parse_is_strict() {
        assert_eq!("tr".parse::<Locale>(), Ok(Locale::Tr));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn missing_turkish_entry_falls_back_to_english() {
        assert_eq!(
            Locale::Tr.translate(Message::ConfirmDeleteSelected),
            Locale::En.translate(Message::ConfirmDeleteSelected)
        );
        assert_eq!(Locale::Tr.translate(Message::Save), "Kaydet");
    }
}
