use colored::*;

use teamnet_common::network::subnet::SubnetDescriptor;

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn subnet_to_detail(descriptor: &SubnetDescriptor) -> Vec<Detail> {
    let network = descriptor.network();
    let address: ColoredString = network.network().to_string().color(colors::IPV4_ADDR);
    let prefix: ColoredString = network.prefix().to_string().color(colors::IPV4_PREFIX);
    let cidr: ColoredString = format!("{address}/{prefix}").color(colors::SEPARATOR);

    let range = descriptor.assignable_range();
    let assignable: String = format!(
        "{} - {} ({} hosts)",
        range.start_addr.to_string().color(colors::IPV4_ADDR),
        range.end_addr.to_string().color(colors::IPV4_ADDR),
        range.len()
    );

    vec![
        ("Subnet".to_string(), cidr),
        ("Prefix".to_string(), descriptor.base_ip_prefix().color(colors::TEXT_DEFAULT)),
        (
            "Broadcast".to_string(),
            descriptor.broadcast_address().to_string().color(colors::IPV4_ADDR),
        ),
        ("Hosts".to_string(), assignable.normal()),
    ]
}
