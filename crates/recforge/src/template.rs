//! Template catalog
//!
//! A template bundles the candidate text variants and default reference
//! assignments for one incident category. The built-in catalog carries the
//! full service-desk category set (authentication, cloud, email, hardware,
//! mobile devices, databases, application crashes, collaboration tools,
//! peripherals, phishing, connectivity, VPN, WiFi, logistics, order
//! management, ERP) together with the shared caller and agent pools.
//!
//! Rules:
//! - `pick` is uniform over templates, regardless of how many text variants
//!   each one carries
//! - every template must have at least one short description; other lists
//!   may be empty and fall back to a fixed default at synthesis time
//! - an empty string inside a non-empty list is a valid sample, not a bug

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::resolver::EntityKind;

// ============================================================================
// Fixed Pools
// ============================================================================

/// Contact channels a record can come in through
pub const CONTACT_CHANNELS: &[&str] = &["email", "phone", "self-service", "chat", "virtual_agent"];

/// Close codes for terminal records
pub const CLOSE_CODES: &[&str] = &[
    "Solved (Work Around)",
    "Solved (Permanently)",
    "Solved Remotely (Work Around)",
    "Not Solved (Not Reproducible)",
    "Not Solved (Too Costly)",
    "Closed/Resolved by Caller",
];

/// Fallback when a template has no work-note variants
pub const DEFAULT_WORK_NOTE: &str = "Technician updated hardware configuration.";

/// Fallback when a template has no comment variants
pub const DEFAULT_COMMENT: &str = "User is informed about the update of VPN client to 3.1.";

/// Fallback when a template has no description variants
pub const DEFAULT_DESCRIPTION: &str = "User reported an issue via the service desk.";

/// Fallback when a template has no resolution-note variants
pub const DEFAULT_CLOSE_NOTES: &str =
    "User rebooted their PC to fix this. They will get back if the issue persists.";

// ============================================================================
// Reference Keys
// ============================================================================

/// Symbolic reference to an external entity, resolved by natural key at run
/// time (never a raw identifier in the catalog)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceKey {
    pub kind: EntityKind,
    /// Field the natural key lives in (`user_name` for users, `name` for
    /// everything else)
    pub field: String,
    pub value: String,
}

impl ReferenceKey {
    pub fn user(name: &str) -> Self {
        ReferenceKey {
            kind: EntityKind::User,
            field: "user_name".to_string(),
            value: name.to_string(),
        }
    }

    pub fn group(name: &str) -> Self {
        ReferenceKey {
            kind: EntityKind::Group,
            field: "name".to_string(),
            value: name.to_string(),
        }
    }

    pub fn service(name: &str) -> Self {
        ReferenceKey {
            kind: EntityKind::Service,
            field: "name".to_string(),
            value: name.to_string(),
        }
    }

    pub fn configuration_item(name: &str) -> Self {
        ReferenceKey {
            kind: EntityKind::ConfigurationItem,
            field: "name".to_string(),
            value: name.to_string(),
        }
    }
}

// ============================================================================
// Template
// ============================================================================

/// Immutable descriptor for one incident category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub category: String,
    pub subcategory: String,
    /// Group the record is routed to; `None` leaves it unrouted
    pub assignment_group: Option<ReferenceKey>,
    /// Related business service
    pub service: Option<ReferenceKey>,
    /// Related configuration item
    pub configuration_item: Option<ReferenceKey>,
    pub short_descriptions: Vec<String>,
    pub descriptions: Vec<String>,
    pub work_notes: Vec<String>,
    pub comments: Vec<String>,
    pub resolution_notes: Vec<String>,
}

/// Catalog construction errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no templates")]
    Empty,

    #[error("template {0} ({1}/{2}) has no short descriptions")]
    NoShortDescriptions(usize, String, String),
}

/// Ordered, immutable collection of templates plus the shared caller and
/// agent pools. Built once per run; nothing writes to it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
    pub callers: Vec<ReferenceKey>,
    pub agents: Vec<ReferenceKey>,
}

impl TemplateCatalog {
    /// Build a catalog, validating the non-empty short-description invariant
    pub fn new(
        templates: Vec<Template>,
        callers: Vec<ReferenceKey>,
        agents: Vec<ReferenceKey>,
    ) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, template) in templates.iter().enumerate() {
            if template.short_descriptions.is_empty() {
                return Err(CatalogError::NoShortDescriptions(
                    index,
                    template.category.clone(),
                    template.subcategory.clone(),
                ));
            }
        }
        Ok(TemplateCatalog {
            templates,
            callers,
            agents,
        })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    /// Pick a template uniformly at random. Each template is equally likely
    /// regardless of its field-list sizes.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> (usize, &Template) {
        let index = rng.gen_range(0..self.templates.len());
        (index, &self.templates[index])
    }

    /// The catalog that ships with the crate
    pub fn builtin() -> Self {
        let callers = vec![
            ReferenceKey::user("abraham.lincoln"),
            ReferenceKey::user("abel.tuter"),
            ReferenceKey::user("fred.luddy"),
        ];
        let agents = vec![
            ReferenceKey::user("beth.anglin"),
            ReferenceKey::user("david.loo"),
            ReferenceKey::user("laxmi.analyst"),
            ReferenceKey::user("amelia.bryant"),
        ];
        TemplateCatalog::new(builtin_templates(), callers, agents)
            .expect("built-in catalog is valid")
    }
}

fn template(
    category: &str,
    subcategory: &str,
    assignment_group: Option<ReferenceKey>,
    service: Option<ReferenceKey>,
    configuration_item: Option<ReferenceKey>,
    short_descriptions: &[&str],
    descriptions: &[&str],
    work_notes: &[&str],
    comments: &[&str],
    resolution_notes: &[&str],
) -> Template {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Template {
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        assignment_group,
        service,
        configuration_item,
        short_descriptions: owned(short_descriptions),
        descriptions: owned(descriptions),
        work_notes: owned(work_notes),
        comments: owned(comments),
        resolution_notes: owned(resolution_notes),
    }
}

fn builtin_templates() -> Vec<Template> {
    let laptop = ReferenceKey::configuration_item("Apple - MacBook Pro 15\" for Technical Staff");
    vec![
        // Password & authentication
        template(
            "security",
            "authentication",
            Some(ReferenceKey::group("IT Securities")),
            None,
            None,
            &[
                "forgot my password",
                "need password reset",
                "locked out after 3 failed login attempts",
                "password expired and can't login",
                "MFA not working on phone",
                "can't receive authentication code",
                "2FA token not working",
                "account locked - need unlock",
                "pasword reset needed",
            ],
            &[
                "User unable to access account after multiple failed login attempts.",
                "User's password has expired and requires reset.",
                "Multi-factor authentication device not functioning properly.",
                "",
            ],
            &[
                "Verified user identity via alternate email. Sent password reset link.",
                "Confirmed MFA device registration. User needs to re-enroll device.",
                "Account unlocked after security verification.",
            ],
            &[
                "Please check your email for the password reset link. It expires in 24 hours.",
                "Can you confirm which authentication method you're using - SMS or authenticator app?",
                "Your account has been unlocked. Please try logging in again.",
            ],
            &[
                "User successfully reset password and logged in.",
                "MFA device re-enrolled. User confirmed access restored.",
                "Account unlocked. Advised user on password best practices.",
            ],
        ),
        // Cloud services
        template(
            "software",
            "cloud_services",
            Some(ReferenceKey::group("Software")),
            None,
            None,
            &[
                "can't access Azure portal",
                "AWS console showing error 403",
                "Azure VM won't start",
                "S3 bucket permission denied",
                "AWS lambda function timing out",
                "cloud storage quota exceeded",
                "need access to Azure resources",
                "AWS IAM permission issue",
            ],
            &[
                "User unable to access cloud resources due to permission issues.",
                "Cloud service experiencing connectivity problems.",
                "Resource allocation limits reached.",
                "",
            ],
            &[
                "Checked IAM policies. User missing CloudAdmin role.",
                "Contacted cloud operations team. Investigating resource limits.",
                "Added user to Azure AD security group for resource access.",
            ],
            &[
                "We're checking your cloud permissions. Can you confirm which resources you need access to?",
                "There appears to be a quota limit reached. Reviewing with cloud ops team.",
                "Which specific AWS/Azure service are you trying to access?",
            ],
            &[
                "Added user to required Azure AD group. Access confirmed.",
                "Quota increased. Service restored.",
                "IAM permissions updated. User can now access cloud resources.",
            ],
        ),
        // Email & calendar
        template(
            "software",
            "email",
            Some(ReferenceKey::group("Software")),
            Some(ReferenceKey::service("Email")),
            Some(ReferenceKey::configuration_item("EXCH-SD-05")),
            &[
                "emails stuck in outbox",
                "not receiving external emails",
                "Outlook keeps asking for password",
                "calendar invites not sending",
                "mailbox quota exceeded",
                "emails going to junk folder",
                "can't access shared mailbox",
                "outlook disconnected from server",
            ],
            &[
                "User unable to send or receive emails properly.",
                "Calendar synchronization issues across devices.",
                "Mailbox quota limits reached preventing new messages.",
                "",
            ],
            &[
                "Checked Exchange admin center. Mailbox 98% full.",
                "Reviewed mail flow rules. No blocks found for this user.",
                "Recreated Outlook profile. Syncing now.",
            ],
            &[
                "Your mailbox is almost full. Please archive old emails.",
                "Can you check your junk/spam folder? The emails might be filtered there.",
                "What size are the attachments you're trying to download?",
            ],
            &[
                "User archived 2GB of old emails. Mailbox functioning normally.",
                "Removed incorrect mail flow rule. External email delivery restored.",
                "Outlook profile rebuilt. Email sync restored.",
            ],
        ),
        // Hardware
        template(
            "hardware",
            "computer_hardware",
            Some(ReferenceKey::group("Hardware")),
            None,
            Some(laptop.clone()),
            &[
                "Can't see any image on the monitor",
                "My laptop screen is broken",
                "broken keyboard",
                "computer display is blank",
                "dropped my laptop now the screen is broken",
                "laptop won't turn on",
                "hard drive making clicking noise",
                "laptop battery not charging",
            ],
            &[
                "User said the cable between laptop and screen is old.",
                "",
                "Hardware failure suspected.",
                "Physical damage to device.",
            ],
            &[
                "Informed the user we are investigating the inventory of new hardware.",
                "Ran hardware diagnostics. Display adapter failed.",
                "Ordered replacement device. Arrival expected in 2 business days.",
            ],
            &[
                "Thank you for reaching out to support. We are looking into the inventory for possible new hardware.",
                "Can you confirm if the issue started suddenly or gradually?",
                "Have you tried connecting to an external monitor?",
            ],
            &[
                "Replaced the laptop with a new laptop and a new replaced HDMI cable.",
                "Device sent for repair under warranty. Loaner provided.",
                "Battery replaced. Laptop charging normally.",
            ],
        ),
        // VPN
        template(
            "network",
            "vpn",
            Some(ReferenceKey::group("Network")),
            None,
            Some(laptop.clone()),
            &[
                "VPN connectivity issue",
                "problem with VPN",
                "vpn client shows an error 30012",
                "a error message appears when starting VPN",
                "vpn doesn't work",
                "VPN keeps disconnecting",
                "VPN authentication failed",
                "I have vpn 3.0",
            ],
            &[
                "User said the cable between network port and laptop is working but not via wifi.",
                "",
                "Tried to restart laptop no success.",
                "VPN connection unstable or failing to establish.",
            ],
            &[
                "Informed the user we are investigating if there are any known outages of VPN services but also asked for confirmation around VPN client version.",
                "Checked VPN concentrator. No issues detected.",
                "User running outdated VPN client version 3.0. Upgrade required.",
            ],
            &[
                "Can you please confirm if you are running VPN client version 3.0?",
                "Please try disconnecting and reconnecting to VPN.",
                "Let me know if you see any specific error codes.",
            ],
            &[
                "End user upgraded to VPN client version 3.1 and that resolved the issue.",
                "VPN profile recreated. Connection stable.",
                "Certificate renewed. VPN authentication working.",
            ],
        ),
        // WiFi
        template(
            "network",
            "wifi",
            Some(ReferenceKey::group("Network")),
            None,
            Some(laptop.clone()),
            &[
                "wifi connectivity issue on my laptop",
                "problem with wi-fi from my macbook",
                "a error message pops up when starting Wifi",
                "Wifi doesn't work",
                "no wifi signal or low signal",
                "wifi keeps dropping",
                "can't connect to corporate wifi",
                "wifi authentication failed",
            ],
            &[
                "User said the cable between laptop and physical network cable is working. But are seeing an issue related to network. Access Points indicate all good.",
                "",
                "End user has restarted laptop.",
                "WiFi connection unstable or not connecting.",
            ],
            &[
                "Informed the user we are investigating if there are any known wifi firmware issues but also asked for confirmation around Wifi client version.",
                "Checked wireless access points. All functioning normally.",
                "Removed saved wifi network and re-added with fresh authentication.",
            ],
            &[
                "Can you please confirm if you are running Wifi client version 2.0?",
                "Have you tried forgetting the network and reconnecting?",
                "What is your approximate distance from the wireless access point?",
            ],
            &[
                "End user upgraded to wifi client version 2.6.3 and that resolved the issue.",
                "WiFi driver updated. Connection stable.",
                "Access point firmware updated. Signal strength improved.",
            ],
        ),
        // Logistics
        template(
            "software",
            "logistics",
            Some(ReferenceKey::group("Software")),
            Some(ReferenceKey::service("Logistics")),
            None,
            &[
                "need access to power bi",
                "how do I get access to power bi?",
                "locked out from Logistics",
                "Is Logistics system down?",
                "Can't access to Logistics System",
                "no response from logistics system",
                "Logistics system is very slow when updating records of data",
                "cant login to logistics",
            ],
            &[
                "User is locked out.",
                "",
                "User is a new hire and wants to access to Logistics system.",
                "User is reporting that from their location they don't have access to Logistics system but can connect to outside internet.",
            ],
            &[
                "Informed the user to use the self service portal.",
                "Verified user account status. Adding to Logistics access group.",
                "Checked system status. No known outages.",
            ],
            &[
                "Please use self service for account lock out.",
                "What specific features of the Logistics system do you need access to?",
                "Have you been granted access approval by your manager?",
            ],
            &[
                "User added to Logistics access group. Access confirmed.",
                "Account unlocked. User able to login successfully.",
                "Self-service portal link provided. User completed access request.",
            ],
        ),
        // Order management
        template(
            "software",
            "order_management",
            Some(ReferenceKey::group("ITOM Rockstars Support")),
            Some(ReferenceKey::service("Order Status")),
            None,
            &[
                "can't connect to order status from our location in Sweden",
                "can not connect to order status",
                "no response from Order Status",
                "Order Status is blank",
                "Order Status system is down",
                "can't access order system",
                "order portal error 500",
                "orders not loading",
            ],
            &[
                "User reporting that order status is slow or down.",
                "",
                "Regional connectivity issue to Order Status system.",
                "User unable to view order information.",
            ],
            &[
                "Informed the user we are investigating if there are any known outages.",
                "Checked application logs. Database connection timeout detected.",
                "Escalated to on-call team for investigation.",
            ],
            &[
                "Thank you for reaching out to support. We are investigating the issue of order portal system if there are any known errors or outages.",
                "Can you confirm which location you're connecting from?",
                "Are you able to access other internal systems?",
            ],
            &[
                "Escalated to the on call team and they resolved with a restart of background process.",
                "VPN tunnel restored. Order Status accessible from all locations.",
                "Application server restart resolved the blank screen issue.",
            ],
        ),
        // Mobile devices
        template(
            "hardware",
            "mobile_device",
            Some(ReferenceKey::group("Hardware")),
            None,
            Some(laptop.clone()),
            &[
                "company iPhone not receiving emails",
                "can't install company app on Android",
                "mobile device says not compliant",
                "Intune enrollment failed",
                "company portal app crashing",
                "lost company phone need remote wipe",
                "phone won't sync with Exchange",
                "mobile device management error",
            ],
            &[
                "User experiencing issues with mobile device management enrollment.",
                "Corporate applications not functioning on mobile device.",
                "Device compliance check failing.",
                "",
            ],
            &[
                "Checked MDM console. Device last checked in 3 days ago.",
                "Initiated remote sync. Waiting for device to come online.",
                "Remote wipe initiated per security policy for lost device.",
            ],
            &[
                "Can you confirm if you're on WiFi or cellular data?",
                "Please try removing and re-adding your work account.",
                "Have you installed the latest Company Portal app update?",
            ],
            &[
                "Device re-enrolled in Intune. All policies applied successfully.",
                "Email profile reconfigured. User receiving emails.",
                "Company Portal app reinstalled. Device now compliant.",
            ],
        ),
        // Database performance
        template(
            "software",
            "database",
            Some(ReferenceKey::group("Software")),
            Some(ReferenceKey::service("IT Services")),
            None,
            &[
                "database query taking forever",
                "SQL server timeout errors",
                "can't connect to production DB",
                "getting deadlock errors",
                "database backup failed",
                "connection pool exhausted",
                "stored procedure timing out",
                "DB connection refused",
            ],
            &[
                "Users reporting application slowness traced to database queries.",
                "Database connection errors affecting multiple applications.",
                "Performance degradation during peak hours.",
                "",
            ],
            &[
                "Checked execution plans. Missing index on customer_orders table.",
                "Database CPU at 98%. Long-running query from reporting tool identified.",
                "Escalated to DBA team for performance tuning.",
            ],
            &[
                "We've identified a slow query. Database team is optimizing.",
                "Can you confirm which application you're using when this happens?",
                "Is this affecting all users or just specific operations?",
            ],
            &[
                "Created new index. Query time reduced from 45s to 2s.",
                "Database statistics updated. Performance restored to normal.",
                "Query optimized by DBA team. Application performance improved.",
            ],
        ),
        // Application crashes
        template(
            "software",
            "application_crash",
            Some(ReferenceKey::group("Software")),
            None,
            Some(laptop.clone()),
            &[
                "Excel crashes when opening large files",
                "Teams keeps freezing",
                "Chrome browser crashing repeatedly",
                "application gives error code 0x80070005",
                "software freezes during startup",
                "app crashes when printing",
                "application has stopped working error",
                "program not responding",
            ],
            &[
                "Application crashing or freezing during normal use.",
                "Error messages appearing when launching software.",
                "Software not responding to user input.",
                "",
            ],
            &[
                "Checked event logs. Application fault at msvcrt.dll.",
                "User running outdated version 2.1.3. Current is 2.2.1.",
                "Cleared application cache and temp files.",
            ],
            &[
                "Can you describe what you're doing right before it crashes?",
                "We found an update available. Installing now.",
                "Have you installed any new software recently?",
            ],
            &[
                "Updated application to latest version. Issue resolved.",
                "Repaired Office installation. Excel stability restored.",
                "Application reinstalled. Crash issue no longer occurring.",
            ],
        ),
        // Collaboration tools
        template(
            "software",
            "collaboration",
            Some(ReferenceKey::group("Software")),
            None,
            None,
            &[
                "can't hear audio in Teams meeting",
                "Zoom screen share not working",
                "Teams video frozen",
                "microphone not working in Teams",
                "screen sharing shows black screen",
                "getting echo in conference calls",
                "video call keeps dropping",
                "Teams status not updating",
            ],
            &[
                "User unable to participate fully in video conferences.",
                "Audio or video issues during virtual meetings.",
                "Screen sharing functionality not working.",
                "",
            ],
            &[
                "Checked Teams diagnostics. Codec error detected.",
                "User's camera permissions disabled in Windows settings.",
                "Updated Teams to latest version. Testing now.",
            ],
            &[
                "Can you try switching to a different audio device in Teams settings?",
                "Try joining from the web browser as a temporary workaround.",
                "Are other participants having the same issue?",
            ],
            &[
                "Updated Teams to latest version. Audio and video working.",
                "Reconfigured audio device settings. Echo eliminated.",
                "Replaced faulty headset. Audio quality now good.",
            ],
        ),
        // Printing & peripherals
        template(
            "hardware",
            "peripherals",
            Some(ReferenceKey::group("Hardware")),
            None,
            None,
            &[
                "printer offline can't print",
                "scanner not detected",
                "print job stuck in queue",
                "wireless keyboard not connecting",
                "USB device not recognized",
                "printer printing blank pages",
                "print spooler error",
                "bluetooth mouse not pairing",
            ],
            &[
                "Printing services not functioning properly.",
                "Peripheral devices not connecting or functioning.",
                "Hardware devices not being recognized by computer.",
                "",
            ],
            &[
                "Checked print server. Printer status shows offline.",
                "Print spooler service stopped. Restarted service.",
                "Cleared print queue and restarted printer.",
            ],
            &[
                "Can you try turning the printer off and on again?",
                "Please check if the printer cable is firmly connected.",
                "Have you tried connecting to a different USB port?",
            ],
            &[
                "Print spooler cleared and restarted. User able to print.",
                "USB drivers reinstalled. Device recognized and functioning.",
                "Replaced faulty USB cable. Printer now working.",
            ],
        ),
        // Phishing & security alerts
        template(
            "security",
            "phishing",
            Some(ReferenceKey::group("IT Securities")),
            None,
            None,
            &[
                "received suspicious email asking for password",
                "strange email with urgent wire transfer request",
                "email with suspicious attachment",
                "possible phishing attempt",
                "CEO asking for gift cards via email?",
                "email asking to verify Office 365 credentials",
                "unusual login alert",
                "security alert on my account",
            ],
            &[
                "User reporting suspected phishing or social engineering attempt.",
                "Suspicious email requesting sensitive information or actions.",
                "Email impersonation or spoofing suspected.",
                "",
            ],
            &[
                "Reviewed email headers. Sender domain is spoofed.",
                "Added sender to block list. Submitted to threat intel team.",
                "Confirmed phishing campaign. Security alert sent company-wide.",
            ],
            &[
                "Thank you for reporting this! Do NOT click any links or open attachments.",
                "Please delete the email and do not respond to it.",
                "You did the right thing by reporting this. We're investigating.",
            ],
            &[
                "Confirmed phishing attempt. Email blocked company-wide. User educated on identifying phishing.",
                "Malicious emails removed from all affected mailboxes. Security alert sent.",
                "Phishing email quarantined. User trained on security awareness.",
            ],
        ),
        // Network & connectivity
        template(
            "network",
            "connectivity",
            Some(ReferenceKey::group("Network")),
            None,
            Some(laptop.clone()),
            &[
                "internet connection very slow",
                "can't connect to shared drives",
                "network drive keeps disconnecting",
                "no network connectivity",
                "DNS not resolving internal sites",
                "remote desktop connection failed",
                "intermittent network drops",
                "network adapter not working",
            ],
            &[
                "User experiencing network connectivity issues.",
                "Unable to access network resources.",
                "DNS or network routing problems.",
                "",
            ],
            &[
                "Pinged user's workstation. 40% packet loss detected.",
                "Checked switch port. Interface showing CRC errors.",
                "Network cable tested - appears to be faulty.",
            ],
            &[
                "Can you confirm if you're on wired or wireless connection?",
                "Are other websites loading properly, or is it just internal sites?",
                "Can you try unplugging and replugging your network cable?",
            ],
            &[
                "Network cable replaced. Connection stable.",
                "DNS configuration corrected. All sites accessible.",
                "Network adapter drivers updated. Connectivity stable.",
            ],
        ),
        // ERP systems
        template(
            "software",
            "erp",
            Some(ReferenceKey::group("Software")),
            Some(ReferenceKey::service("IT Services")),
            Some(ReferenceKey::configuration_item("SAP AppSRV01")),
            &[
                "Request for ERP software license",
                "do we have additional user license for our ERP?",
                "our ERP system is showing blank screen",
                "ERP login not working",
                "cant access ERP reports",
                "ERP performance very slow",
                "getting ERP database error",
                "ERP session timeout",
            ],
            &[
                "End user can't access the ERP system software.",
                "",
                "User requesting additional ERP license.",
                "Performance issues with ERP client.",
            ],
            &[
                "Informed the user we are investigating if there are any known license issues related to ERP access.",
                "Checked SAP license server. 5 licenses available.",
                "Assigned available ERP license to user.",
            ],
            &[
                "Can you please confirm if you are running ERP client version 10.0 or newer?",
                "Which ERP module are you trying to access?",
                "Let me check license availability.",
            ],
            &[
                "End user upgraded to ERP client version 10.1 and that resolved the issue.",
                "ERP license assigned. User can now access the system.",
                "ERP client repaired. Application launching successfully.",
            ],
        ),
    ]
}

// ============================================================================
// Tests
// ============================================================================
