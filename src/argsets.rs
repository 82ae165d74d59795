pub struct ConfigShowArgs {
    pub reveal: bool,
}

pub struct ConfigGetArgs {
    pub key: String,
}
