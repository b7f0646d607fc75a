pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub const fn ar() -> &'static str {
        "AR"
    }

    pub const fn bo() -> &'static str {
        "BO"
    }

    pub const fn br() -> &'static str {
        "BR"
    }

    pub const fn cl() -> &'static str {
        "CL"
    }

    pub const fn co() -> &'static str {
        "CO"
    }

    pub const fn ec() -> &'static str {
        "EC"
    }

    pub const fn es() -> &'static str {
        "ES"
    }

    pub const fn mx() -> &'static str {
        "MX"
    }

    pub const fn pe() -> &'static str {
        "PE"
    }

    pub const fn py() -> &'static str {
        "PY"
    }

    pub const fn us() -> &'static str {
        "US"
    }

    pub const fn uy() -> &'static str {
        "UY"
    }

    pub const fn ve() -> &'static str {
        "VE"
    }

    /// Returns a region code string representing the "unknown" region.
    pub const fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub const fn zz() -> &'static str {
        "ZZ"
    }
}
