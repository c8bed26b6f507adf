// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod absences_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod financial_loss_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod label_models;
    }
    pub(crate) mod repositories {
        pub(crate) mod absences_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod absence_record;
        pub(crate) mod assessment;
        pub(crate) mod ledger;
        pub(crate) mod ledger_diff;
        pub(crate) mod period;
        pub(crate) mod report;
        pub(crate) mod statistics;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregation;
        pub(crate) mod ledger_editor;
        pub(crate) mod months;
        pub(crate) mod report_composer;
        pub(crate) mod report_text_catalog;
    }
    pub(crate) mod repositories {
        pub(crate) mod absences_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod ledger_usecase;
        pub(crate) mod statistics_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod chart_renderer;
    pub(crate) mod docx_writer;
    pub(crate) mod report_preview;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::absence_record::*;
        pub use crate::domain::entities::assessment::*;
        pub use crate::domain::entities::ledger::*;
        pub use crate::domain::entities::ledger_diff::*;
        pub use crate::domain::entities::period::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::statistics::*;
    }

    pub mod catalog {
        pub use crate::domain::logic::months::*;
        pub use crate::domain::logic::report_text_catalog::*;
    }

    pub mod aggregation {
        pub use crate::domain::logic::aggregation::*;
    }

    pub mod charts {
        pub use crate::presentation::chart_renderer::*;
    }

    pub mod formatting {
        pub use crate::presentation::amount_fmt::*;
    }
}
