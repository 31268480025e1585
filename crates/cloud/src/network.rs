/// A subnet of a virtual network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subnet {
    /// The subnet ID.
    pub subnet_id: String,

    /// The VPC the subnet belongs to.
    pub vpc_id: String,

    /// The availability zone of the subnet.
    pub availability_zone: String,

    /// The IPv4 CIDR block of the subnet.
    pub cidr_block: Option<String>,
}
