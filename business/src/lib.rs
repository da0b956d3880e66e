pub mod application {
    pub mod receipt {
        pub mod scan_receipt;
    }
}

pub mod domain {
    pub mod logger;
    pub mod receipt {
        pub mod errors;
        pub mod model;
        pub mod parser;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod scan_receipt;
        }
    }
}
