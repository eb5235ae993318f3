/// Connection defaults applied wherever a call shape leaves a field out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverDefaults {
    pub host: &'static str,
    pub server_name: &'static str,
    pub port: u16,
    pub record_class: &'static str,
    pub record_type: &'static str,
}

impl ResolverDefaults {
    pub const CLOUDFLARE: Self = Self {
        host: "1.1.1.1",
        server_name: "cloudflare-dns.com",
        port: 853,
        record_class: "IN",
        record_type: "A",
    };

    pub const QUAD9: Self = Self {
        host: "9.9.9.9",
        server_name: "dns.quad9.net",
        port: 853,
        record_class: "IN",
        record_type: "A",
    };

    pub const GOOGLE: Self = Self {
        host: "8.8.8.8",
        server_name: "dns.google",
        port: 853,
        record_class: "IN",
        record_type: "A",
    };
}

impl Default for ResolverDefaults {
    fn default() -> Self {
        Self::CLOUDFLARE
    }
}
