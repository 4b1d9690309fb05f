//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn name() -> String {
        "Best Roofers Now".into()
    }

    pub fn url() -> String {
        "https://bestroofingnow.com".into()
    }

    pub fn telephone() -> String {
        "+1-704-605-6047".into()
    }

    pub fn display_phone() -> String {
        "(704) 605-6047".into()
    }

    pub fn logo() -> String {
        "https://storage.googleapis.com/msgsndr/YnvUmp9cZqt5xmVLrnoq/media/6927385cc3c18274f73920b2.png"
            .into()
    }

    pub fn city() -> String {
        "Charlotte".into()
    }

    pub fn region() -> String {
        "NC".into()
    }

    pub fn title() -> String {
        "Best Roofers Now | Charlotte Roofing & Storm Restoration Experts".into()
    }

    pub fn description() -> String {
        "Best Roofers Now is Charlotte's trusted expert for residential & commercial roofing, \
         storm damage repair, and free drone inspections. 50-Year Warranty. Licensed in NC/SC."
            .into()
    }

    pub fn keywords() -> String {
        "Roofing Charlotte NC, Roof Replacement, Storm Damage Repair, Commercial Roofing Charlotte, \
         TPO Roofing, Metal Roofing, GAF Master Elite, Insurance Claim Roofer, Drone Roof Inspection, \
         Best Roofers Now, Roof Repair"
            .into()
    }

    pub fn price_range() -> String {
        "$$".into()
    }

    pub mod address {
        pub fn street() -> String {
            "10130 Mallard Creek Road, Suite 300".into()
        }

        pub fn postal_code() -> String {
            "28262".into()
        }

        pub fn country() -> String {
            "US".into()
        }
    }

    pub mod geo {
        pub fn latitude() -> f64 {
            35.2271
        }

        pub fn longitude() -> f64 {
            -80.8431
        }
    }
}

// ============================================================================
// [assistant] Section Defaults
// ============================================================================

pub mod assistant {
    pub fn api_key_env() -> String {
        "API_KEY".into()
    }

    pub fn base_url() -> String {
        "https://generativelanguage.googleapis.com/v1beta".into()
    }

    pub fn model() -> String {
        "gemini-2.5-flash".into()
    }

    pub fn speech_model() -> String {
        "gemini-2.5-flash-preview-tts".into()
    }

    pub fn voice() -> String {
        "Kore".into()
    }

    pub fn sample_rate() -> u32 {
        24_000
    }
}

// ============================================================================
// [projects] Section Defaults
// ============================================================================

pub mod projects {
    pub fn base_url() -> String {
        "https://projectmapit.com/api/v1".into()
    }

    pub fn api_key_env() -> String {
        "PROJECT_MAP_IT_KEY".into()
    }

    pub fn limit() -> u32 {
        5
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn commercial() -> Vec<String> {
        vec!["charlotte".into()]
    }
}

// ============================================================================
// [navigation] Section Defaults
// ============================================================================

pub mod navigation {
    pub fn close_scroll_delay_ms() -> u64 {
        300
    }
}
