pub struct LookupArgs {
    pub query: String,
    pub unit: Option<String>,
    pub limit: Option<usize>,
}

pub struct NormalizeUnitArgs {
    pub raw: String,
}

pub struct DescribeArgs {
    pub key: String,
    pub json: bool,
}
