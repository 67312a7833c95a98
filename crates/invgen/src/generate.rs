//! the one operation: read terraform output, write the inventory tree,
//! consume the input file
use crate::inventory;
use crate::terraform::TerraformOutputs;
use std::path::Path;

/// Generates `<root>/inventory/` from `<root>/inventory.json`, then
/// deletes the consumed input file.
///
/// The input file is a single-use transfer artifact, so deleting it is
/// part of a successful run; failing to delete it fails the run. Output
/// files are overwritten wholesale, and anything written before a failure
/// stays on disk.
///
/// The confirmation lines on stdout are part of the tool's interface and
/// are printed once per write phase.
pub fn generate(root: &Path) -> anyhow::Result<()> {
    let input_path = root.join("inventory.json");
    let outputs = TerraformOutputs::load_file(&input_path)?;

    let addresses = outputs.string_list("web_server_ips")?;
    let ids = outputs.string_list("web_server_ids")?;
    let load_balancer_dns = outputs.string("load_balancer_dns")?;

    let hosts = inventory::pair_hosts(addresses, ids);
    tracing::info!(hosts = hosts.len(), "paired terraform outputs");

    let inventory_dir = root.join("inventory");
    let group_vars_dir = inventory_dir.join("group_vars");
    let host_vars_dir = inventory_dir.join("host_vars");
    std::fs::create_dir_all(&group_vars_dir)?;
    std::fs::create_dir_all(&host_vars_dir)?;

    let hosts_path = inventory_dir.join("hosts");
    std::fs::write(
        &hosts_path,
        inventory::render_hosts(&hosts, &load_balancer_dns),
    )?;
    println!("Inventory generated: {}", hosts_path.display());

    let group_vars_path = group_vars_dir.join("web_servers.yml");
    std::fs::write(&group_vars_path, inventory::render_group_vars()?)?;
    println!("Group variables generated: {}", group_vars_path.display());

    for host in &hosts {
        let host_vars_path = host_vars_dir.join(format!("web-server-{}.yml", host.index));
        std::fs::write(&host_vars_path, inventory::render_host_vars(host)?)?;
    }
    println!("Host variables generated in: {}", host_vars_dir.display());

    std::fs::remove_file(&input_path)?;
    println!("Cleaned up temporary inventory.json file");

    Ok(())
}
