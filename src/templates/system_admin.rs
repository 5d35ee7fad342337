use super::BoilerplateScript;

pub(crate) fn scripts() -> Vec<BoilerplateScript> {
    vec![
        BoilerplateScript::new(
            "system-update",
            "System Update Script",
            "Automatically updates and upgrades system packages",
            "system-admin",
            r##"#!/bin/bash

# System Update Script
# Description: Updates and upgrades system packages
# Usage: ./system_update.sh

echo "Starting system update..."

# Update package lists
apt-get update

# Upgrade installed packages
apt-get upgrade -y

# Perform distribution upgrade
apt-get dist-upgrade -y

# Clean up
apt-get autoremove -y
apt-get autoclean

echo "System update completed successfully!"
"##,
        ),
        BoilerplateScript::new(
            "disk-space-check",
            "Disk Space Check",
            "Monitors disk usage and sends alerts if usage exceeds a threshold",
            "system-admin",
            r##"#!/bin/bash

# Disk Space Check Script
# Description: Monitors disk usage and alerts if threshold is exceeded
# Usage: ./disk_space_check.sh [threshold_percent]

# Set the threshold (default: 90%)
THRESHOLD=${1:-90}

# Get disk usage information
DISK_USAGE=$(df -h / | grep -v Filesystem | awk '{print $5}' | tr -d '%')

echo "Current disk usage: $DISK_USAGE%"

# Check if disk usage exceeds threshold
if [ "$DISK_USAGE" -gt "$THRESHOLD" ]; then
  echo "WARNING: Disk usage is above threshold!"
  echo "Disk usage: $DISK_USAGE% (Threshold: $THRESHOLD%)"

  # You can add notification commands here (e.g., send email)
  # mail -s "Disk Space Alert" admin@example.com << EOF
  # Disk usage is above threshold!
  # Usage: $DISK_USAGE% (Threshold: $THRESHOLD%)
  # EOF

  exit 1
else
  echo "Disk usage is below threshold ($THRESHOLD%)."
  exit 0
fi
"##,
        ),
        BoilerplateScript::new(
            "create-swap",
            "Create Swap File",
            "Adds swap space to the system to handle memory issues",
            "system-admin",
            r##"#!/bin/bash

# Create Swap File Script
# Description: Creates and enables a swap file
# Usage: ./create_swap.sh [swap_size_in_gb]

# Set swap size (default: 2GB)
SWAP_SIZE=${1:-2}

echo "Creating $SWAP_SIZE GB swap file..."

# Create swap file
sudo fallocate -l "$SWAP_SIZE"G /swapfile
sudo chmod 600 /swapfile
sudo mkswap /swapfile
sudo swapon /swapfile

# Make swap permanent
echo '/swapfile none swap sw 0 0' | sudo tee -a /etc/fstab

# Verify swap is enabled
echo "Swap status:"
sudo swapon --show

echo "Swap file created and enabled successfully!"
"##,
        ),
        BoilerplateScript::new(
            "static-ip",
            "Configure Static IP",
            "Configures a static IP for the server",
            "system-admin",
            r##"#!/bin/bash

# Configure Static IP Script
# Description: Sets up a static IP address for the server
# Usage: ./configure_static_ip.sh [ip_address] [subnet_mask] [gateway]

# Default values (replace with your network settings)
IP_ADDRESS=${1:-"192.168.1.100"}
SUBNET_MASK=${2:-"255.255.255.0"}
GATEWAY=${3:-"192.168.1.1"}
INTERFACE="eth0"  # Change to your network interface (e.g., eth0, ens33)

echo "Configuring static IP: $IP_ADDRESS"

# Backup the existing network configuration
sudo cp /etc/network/interfaces /etc/network/interfaces.bak

# Create new network configuration
cat > /tmp/interfaces << EOF
# This file describes the network interfaces available on your system
# and how to activate them. For more information, see interfaces(5).

source /etc/network/interfaces.d/*

# The loopback network interface
auto lo
iface lo inet loopback

# The primary network interface
auto $INTERFACE
iface $INTERFACE inet static
    address $IP_ADDRESS
    netmask $SUBNET_MASK
    gateway $GATEWAY
    dns-nameservers 8.8.8.8 8.8.4.4
EOF

# Apply the new configuration
sudo cp /tmp/interfaces /etc/network/interfaces
sudo rm /tmp/interfaces

echo "Static IP configuration complete."
echo "Restart networking service with: sudo systemctl restart networking"
"##,
        ),
        BoilerplateScript::new(
            "service-restart",
            "Service Restart Script",
            "Automatically restarts a service if it's down",
            "system-admin",
            r##"#!/bin/bash

# Service Restart Script
# Description: Checks if a service is running and restarts it if needed
# Usage: ./service_restart.sh [service_name]

SERVICE_NAME=${1:-"nginx"}

echo "Checking status of $SERVICE_NAME service..."

# Check if the service is running
if systemctl is-active --quiet $SERVICE_NAME; then
  echo "$SERVICE_NAME service is running."
else
  echo "$SERVICE_NAME service is down. Restarting..."
  systemctl restart $SERVICE_NAME

  # Check if restart was successful
  if systemctl is-active --quiet $SERVICE_NAME; then
    echo "$SERVICE_NAME service restarted successfully."
  else
    echo "Failed to restart $SERVICE_NAME service. Manual intervention required."
    exit 1
  fi
fi

exit 0
"##,
        ),
    ]
}
