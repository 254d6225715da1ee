//! Literal file contents of the real-estate skeleton, byte for byte.

pub(super) const FEEDBACK_FORM: &str = r#"
import React, { useState } from 'react';
import axios from 'axios';

const FeedbackForm: React.FC = () => {
  const [feedback, setFeedback] = useState('');

  const handleSubmit = async (e: React.FormEvent) => {
    e.preventDefault();
    try {
      await axios.post('/api/feedback', { feedback });
      alert('Feedback submitted successfully');
      setFeedback('');
    } catch (error) {
      console.error('Error submitting feedback:', error);
    }
  };

  return (
    <form onSubmit={handleSubmit}>
      <textarea
        value={feedback}
        onChange={(e) => setFeedback(e.target.value)}
        placeholder="Enter your feedback"
      />
      <button type="submit">Submit Feedback</button>
    </form>
  );
};

export default FeedbackForm;
"#;

pub(super) const PRISMA_SCHEMA: &str = r#"
datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model User {
  id        Int      @id @default(autoincrement())
  email     String   @unique
  password  String
  // ...
}

model Property {
  id        Int      @id @default(autoincrement())
  address   String
  // ...
}
"#;

pub(super) const SETUP_DATABASE: &str = r#"
import { PrismaClient } from '@prisma/client';

const prisma = new PrismaClient();

async function setupDatabase() {
  await prisma.user.deleteMany();
  await prisma.property.deleteMany();
  // ...
  await prisma.$disconnect();
}

setupDatabase()
  .catch((e) => {
    console.error(e);
    process.exit(1);
  })
  .finally(async () => {
    await prisma.$disconnect();
  });
"#;

pub(super) const SECRETS: &str = r#"
import AWS from 'aws-sdk';

const secretsManager = new AWS.SecretsManager({
  region: process.env.AWS_REGION,
});

export async function getSecret(secretName: string): Promise<string> {
  const data = await secretsManager.getSecretValue({ SecretId: secretName }).promise();
  return data.SecretString;
}
"#;

pub(super) const PROVISION_CERTIFICATE: &str = r#"
import { spawnSync } from 'child_process';

function provisionCertificate() {
  const domain = process.env.DOMAIN;
  const email = process.env.CERT_EMAIL;

  const result = spawnSync('certbot', [
    'certonly',
    '--standalone',
    '--noninteractive',
    '--agree-tos',
    `--email=${email}`,
    `-d=${domain}`,
  ]);

  if (result.status !== 0) {
    console.error('Certificate provisioning failed');
    process.exit(1);
  }

  console.log('Certificate provisioned successfully');
}

provisionCertificate();
"#;

// An XML declaration must be the first byte of the document.
pub(super) const LOAD_TEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<jmeterTestPlan version="1.2" properties="5.0" jmeter="5.4.1">
  <!-- ... -->
  <hashTree>
    <ThreadGroup guiclass="ThreadGroupGui" testclass="ThreadGroup" testname="Thread Group">
      <!-- ... -->
    </ThreadGroup>
    <!-- ... -->
  </hashTree>
</jmeterTestPlan>
"#;
