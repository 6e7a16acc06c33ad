pub mod shared {
    pub mod infrastructure {
        pub mod snapshot;
    }
}

pub mod modules {
    pub mod marks {
        pub mod core {
            pub mod mark;
            pub mod record;
            pub mod store;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod responses;
            }
        }
        pub mod use_cases {
            pub mod add_mark {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod search_student {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_marks {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_student {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
