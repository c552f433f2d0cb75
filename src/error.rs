error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Req(::reqwest::Error) #[cfg(feature = "http-client")];
        Toml(::toml::de::Error);
        Json(::serde_json::Error);
        Regex(::regex::Error);
    }

    errors {
        NonSuccessStatus(url: String, code: u16) {
            description("The status code of a received response was not success.")
            display("The status code of the response from {} was {} and not success.",
                     url, code)
        }

        AnchorNotFound(what: String) {
            description("An expected structure could not be located in the page.")
            display("Could not locate {} in the page", what)
        }

        InvalidConfig(reason: String) {
            description("The map configuration is not usable.")
            display("Invalid map configuration: {}", reason)
        }
    }
}
