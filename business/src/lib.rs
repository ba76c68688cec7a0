pub mod application {
    pub mod assistant {
        pub mod ask;
        pub mod describe_image;
    }
    pub mod credential {
        pub mod validate;
    }
    pub mod history {
        pub mod get_recent;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod assistant {
        pub mod errors;
        pub mod model;
        pub mod prompts;
        pub mod services;
        pub mod use_cases {
            pub mod ask;
            pub mod describe_image;
        }
    }
    pub mod credential {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod validate;
        }
    }
    pub mod history {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_recent;
        }
    }
}
