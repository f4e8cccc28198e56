pub mod modules {
    pub mod ticketing {
        pub mod core {
            pub mod allocator;
            pub mod ports;
            pub mod receipt;
            pub mod validation;
        }
        pub mod errors;
        pub mod use_cases {
            pub mod purchase_ticket {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reassign_seat {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod release_receipt {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_receipt {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod list_section_receipts {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod in_memory_receipt_store;
        }
    }
}

pub mod shell;
