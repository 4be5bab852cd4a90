//! Display strings for every text the document prints, per locale.

use serde::{Deserialize, Serialize};
use warrant_types::WarrantKind;

/// Language of the printed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "fr", alias = "french")]
    French,
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

impl Locale {
    pub fn labels(self) -> Labels {
        match self {
            Locale::English => Labels::english(),
            Locale::French => Labels::french(),
        }
    }

    /// Month name for a zero-based month index.
    pub fn month_name(self, month0: u32) -> &'static str {
        let months = match self {
            Locale::English => &MONTHS_EN,
            Locale::French => &MONTHS_FR,
        };
        months[month0 as usize % 12]
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "fr" | "french" => Ok(Locale::French),
            other => Err(format!("unknown locale '{}'", other)),
        }
    }
}

/// Declares [`Labels`] together with [`LabelOverrides`], its all-optional
/// counterpart read from configuration files.
macro_rules! labels {
    ($($(#[$doc:meta])* $field:ident),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct Labels {
            $($(#[$doc])* pub $field: String,)*
        }

        /// Per-label replacements applied on top of a locale's labels.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct LabelOverrides {
            $(#[serde(skip_serializing_if = "Option::is_none")] pub $field: Option<String>,)*
        }

        impl Labels {
            #[must_use]
            pub fn with_overrides(mut self, overrides: &LabelOverrides) -> Self {
                $(if let Some(value) = &overrides.$field {
                    self.$field = value.clone();
                })*
                self
            }
        }
    };
}

labels! {
    jurisdiction,
    department,
    sub_department,
    search_title,
    arrest_title,
    subpoena_title,
    reference_prefix,
    date_label,
    officer_label,
    target_label,
    location_label,
    reason_heading,
    details_heading,
    decision_heading,
    pending_marker,
    approved_marker,
    approved_by,
    approval_date,
    approved_stamp,
    rejected_marker,
    rejected_by,
    rejection_reason,
    cancelled_marker,
    cancelled_by,
    ledger_title,
    ledger_reference,
    date_column,
    charges_column,
    total_entries,
    /// Footer attribution; `{id}` and `{page}` are substituted.
    footer,
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

impl Labels {
    pub fn english() -> Self {
        Self {
            jurisdiction: "STATE OF SAN ANDREAS".into(),
            department: "LOS SANTOS POLICE DEPARTMENT".into(),
            sub_department: "DEPARTMENT OF JUSTICE".into(),
            search_title: "SEARCH WARRANT".into(),
            arrest_title: "ARREST WARRANT".into(),
            subpoena_title: "JUDICIAL SUBPOENA".into(),
            reference_prefix: "REF.".into(),
            date_label: "Date".into(),
            officer_label: "Officer".into(),
            target_label: "Target".into(),
            location_label: "Location".into(),
            reason_heading: "Reason".into(),
            details_heading: "Details and Evidence".into(),
            decision_heading: "DECISION OF THE JUDGE / PROSECUTOR".into(),
            pending_marker: "Awaiting decision".into(),
            approved_marker: "APPROVED".into(),
            approved_by: "Validated by".into(),
            approval_date: "Validation date".into(),
            approved_stamp: "VALIDATED".into(),
            rejected_marker: "REJECTED".into(),
            rejected_by: "Rejected by".into(),
            rejection_reason: "Reason".into(),
            cancelled_marker: "CANCELLED".into(),
            cancelled_by: "Cancelled by".into(),
            ledger_title: "Criminal Record".into(),
            ledger_reference: "Ref.".into(),
            date_column: "DATE".into(),
            charges_column: "CHARGES".into(),
            total_entries: "Total entries".into(),
            footer: "Generated by the warrant registry - document {id} - page {page}".into(),
        }
    }

    pub fn french() -> Self {
        Self {
            jurisdiction: "ÉTAT DE SAN ANDREAS".into(),
            department: "LOS SANTOS POLICE DEPARTMENT".into(),
            sub_department: "DÉPARTEMENT DE LA JUSTICE".into(),
            search_title: "MANDAT DE PERQUISITION".into(),
            arrest_title: "MANDAT D'ARRÊT".into(),
            subpoena_title: "RÉQUISITION JUDICIAIRE".into(),
            reference_prefix: "RÉF.".into(),
            date_label: "Date".into(),
            officer_label: "Officier requérant".into(),
            target_label: "Cible".into(),
            location_label: "Lieu concerné".into(),
            reason_heading: "Motif".into(),
            details_heading: "Détails et preuves".into(),
            decision_heading: "DÉCISION DU JUGE / PROCUREUR".into(),
            pending_marker: "En attente de validation".into(),
            approved_marker: "APPROUVÉ".into(),
            approved_by: "Validé par".into(),
            approval_date: "Date de validation".into(),
            approved_stamp: "VALIDÉ".into(),
            rejected_marker: "REJETÉ".into(),
            rejected_by: "Rejeté par".into(),
            rejection_reason: "Raison".into(),
            cancelled_marker: "ANNULÉ".into(),
            cancelled_by: "Annulé par".into(),
            ledger_title: "Casier judiciaire".into(),
            ledger_reference: "Réf.".into(),
            date_column: "DATE".into(),
            charges_column: "CHEFS D'ACCUSATION".into(),
            total_entries: "Nombre d'entrées".into(),
            footer: "Généré par le registre des mandats - document {id} - page {page}".into(),
        }
    }

    pub fn title(&self, kind: WarrantKind) -> &str {
        match kind {
            WarrantKind::Search => &self.search_title,
            WarrantKind::Arrest => &self.arrest_title,
            WarrantKind::Subpoena => &self.subpoena_title,
        }
    }

    pub fn footer_text(&self, short_id: &str, page: usize) -> String {
        self.footer
            .replace("{id}", short_id)
            .replace("{page}", &page.to_string())
    }
}
