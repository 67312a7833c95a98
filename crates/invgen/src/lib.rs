//! # invgen - terraform output to ansible inventory
//!
//! Bridges two tools that do not talk to each other: terraform provisions
//! the machines, ansible configures them. `invgen` transcribes the
//! provisioning facts into the static file layout ansible reads.
//!
//! ### Input
//!
//! A single JSON document at `<root>/inventory.json`, produced by
//! `terraform output -json > inventory.json`. Terraform wraps every output
//! in an object carrying a `value` field:
//!
//! ```json
//! {
//!   "web_server_ips": { "value": ["10.0.0.5", "10.0.0.6"] },
//!   "web_server_ids": { "value": ["i-abc", "i-def"] },
//!   "load_balancer_dns": { "value": "lb.example.com" }
//! }
//! ```
//!
//! All three outputs are optional; a missing one falls back to an empty
//! list or empty string. See [terraform::TerraformOutputs].
//!
//! ### Pipeline
//!
//! 1. [terraform::TerraformOutputs::load_file] reads and parses the
//!    document. An absent file is the only precondition checked up front.
//! 2. [inventory::pair_hosts] zips the address and id lists positionally
//!    into [inventory::Host] records. Pairing stops at the shorter list.
//! 3. The renderers in [inventory] produce the complete file bodies as
//!    strings: the grouped `hosts` file, the static
//!    `group_vars/web_servers.yml`, and one `host_vars/web-server-<n>.yml`
//!    per host.
//! 4. [generate::generate] writes the tree under `<root>/inventory/` and
//!    deletes the consumed `inventory.json`.
//!
//! Every run overwrites the output files wholesale. There is no merging,
//! no incremental update and no rollback: whatever was written before a
//! failure stays on disk.
pub mod generate;
pub mod inventory;
pub mod terraform;
