use super::BoilerplateScript;

pub(crate) fn scripts() -> Vec<BoilerplateScript> {
    vec![BoilerplateScript::new(
        "disk-usage-alert",
        "Disk Usage Alert",
        "Monitors disk space and sends an email alert if space exceeds a threshold",
        "monitoring",
        r##"#!/bin/bash

# Disk Usage Alert Script
# Description: Monitors disk usage and sends an email if threshold exceeded
# Usage: ./disk_usage_alert.sh [threshold_percent] [email_address]

# Configuration
THRESHOLD=${1:-90}  # Default threshold: 90%
EMAIL=${2:-"admin@example.com"}  # Email to send alerts to

# Get disk usage for the root partition
USAGE=$(df -h / | grep -v Filesystem | awk '{print $5}' | tr -d '%')

echo "Current disk usage: $USAGE%"

# Check if usage exceeds threshold
if [ "$USAGE" -gt "$THRESHOLD" ]; then
  echo "Disk usage warning: $USAGE% exceeds threshold of $THRESHOLD%"

  # Prepare email content
  SUBJECT="Disk Space Alert: Server $(hostname)"
  BODY="Warning: Disk usage on server $(hostname) has reached $USAGE%, which exceeds the threshold of $THRESHOLD%.\n\n"
  BODY+="Disk usage details:\n"
  BODY+="$(df -h)\n\n"
  BODY+="Please take appropriate action to free up disk space.\n"

  # Send email alert
  echo -e "$BODY" | mail -s "$SUBJECT" "$EMAIL"

  echo "Alert email sent to $EMAIL"
  exit 1
else
  echo "Disk usage is below threshold ($THRESHOLD%)."
  exit 0
fi
"##,
    )]
}
