// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Printable medical-religious exemption card.
//!
//! Plain text with bilingual field labels, ready to send to a printer or a
//! file. Has nothing to do with ranking.

use crate::types::{Fatwa, PatientLicenseData};
use std::fmt;

const HEADING_AR: &str = "رخصة طبية شرعية";
const HEADING_EN: &str = "Medical-Religious Exemption Card";
const FOOTER_APP: &str = "تطبيق الطبيب الفقيه";
const FOOTER_NOTE: &str = "معتمد استناداً للفتاوى الرسمية";

const RULE_WIDTH: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseCard {
    data: PatientLicenseData,
}

impl LicenseCard {
    pub fn new(data: PatientLicenseData) -> Self {
        LicenseCard { data }
    }

    /// Card whose ruling summary is the record's verdict badge and title.
    pub fn from_fatwa(
        doctor_name: &str,
        patient_name: &str,
        date: &str,
        diagnosis: &str,
        fatwa: &Fatwa,
    ) -> Self {
        Self::new(PatientLicenseData {
            doctor_name: doctor_name.to_string(),
            patient_name: patient_name.to_string(),
            date: date.to_string(),
            diagnosis: diagnosis.to_string(),
            ruling_summary: format!("{}: {} ({})", fatwa.verdict.label(), fatwa.title, fatwa.source),
        })
    }

    pub fn data(&self) -> &PatientLicenseData {
        &self.data
    }

    pub fn render(&self) -> String {
        let heavy = "═".repeat(RULE_WIDTH);
        let dashed = "- ".repeat(RULE_WIDTH / 2);
        let light = "─".repeat(RULE_WIDTH);

        let mut out = String::new();
        out.push_str(&heavy);
        out.push('\n');
        out.push_str(HEADING_AR);
        out.push('\n');
        out.push_str(HEADING_EN);
        out.push('\n');
        out.push_str(&heavy);
        out.push('\n');

        field(&mut out, "الطبيب المعالج / Attending Physician", &self.data.doctor_name);
        out.push_str(&dashed);
        out.push('\n');
        field(&mut out, "اسم المريض / Patient Name", &self.data.patient_name);
        out.push_str(&dashed);
        out.push('\n');
        field(&mut out, "التاريخ / Date", &self.data.date);
        field(&mut out, "التشخيص / Diagnosis", &self.data.diagnosis);
        out.push_str(&light);
        out.push('\n');
        field(&mut out, "الرأي الشرعي الطبي / Ruling", &self.data.ruling_summary);
        out.push_str(&light);
        out.push('\n');
        out.push_str(FOOTER_APP);
        out.push_str("  |  ");
        out.push_str(FOOTER_NOTE);
        out.push('\n');
        out.push_str(&heavy);
        out.push('\n');
        out
    }
}

fn field(out: &mut String, label: &str, value: &str) {
    out.push_str(label);
    out.push('\n');
    out.push_str("  ");
    out.push_str(value.trim());
    out.push('\n');
}

impl fmt::Display for LicenseCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
